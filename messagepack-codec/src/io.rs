//! Output sink abstraction for the packer.

/// A byte sink the packer can write to.
///
/// Blanket-implemented for every [`std::io::Write`], so a `Vec<u8>`, a
/// `File`, or a `TcpStream` all work as a pack destination without an
/// adapter type.
pub trait IoWrite {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

impl<W: std::io::Write> IoWrite for W {
    type Error = std::io::Error;

    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.write_all(buf)
    }
}
