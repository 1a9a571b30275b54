/// Formats its arguments directly into a [`ZString`](crate::ZString).
///
/// Works like [`format!`], but skips the intermediate `String`: plain
/// numeric arguments take the `itoa`/`ryu` fast paths of
/// [`ToZString`](crate::ToZString), and everything else is written into an
/// exactly pre-sized buffer.
#[macro_export]
macro_rules! format_zstring {
    ($fmt:expr) => {{ $crate::ToZString::to_zstring(&$fmt) }};
    ($fmt:expr, $($args:tt)*) => {{
        $crate::ToZString::to_zstring(&format_args!($fmt, $($args)*))
    }};
}
