use core::fmt;
use std::io::{
    Result,
    Write,
};

/// A sink that records how many bytes are written into it, used to size a
/// buffer before formatting into it.
#[derive(Debug, Default)]
pub(crate) struct Sink(usize);

impl Sink {
    #[inline(always)]
    pub(crate) fn count(args: impl fmt::Display) -> usize {
        let mut sink = Sink(0);
        write!(&mut sink, "{}", args).expect("counting sink never errors");
        sink.0
    }
}

impl Write for Sink {
    #[inline(always)]
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
