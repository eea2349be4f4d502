//! Objects that can render themselves to a text sink.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

/// Closed set of known printable variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintableKind {
    /// A [`ConcretePrintable`].
    Concrete,
}

/// Capability for objects that render themselves as text.
pub trait Printable {
    /// Writes the text representation of `self` to `sink`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sink.
    fn render(&self, sink: &mut dyn Write) -> io::Result<()>;

    /// Reports which known variant this object is.
    fn kind(&self) -> PrintableKind;
}

/// Printable object with a fixed rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcretePrintable;

impl ConcretePrintable {
    /// Text written by [`Printable::render`], without the line break.
    pub const TEXT: &'static str = "Printing a concrete object";
}

impl Printable for ConcretePrintable {
    fn render(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{}", Self::TEXT)
    }

    fn kind(&self) -> PrintableKind {
        PrintableKind::Concrete
    }
}

/// Writes `obj` to `sink` through its [`Printable`] capability.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn print_to<P: Printable + ?Sized>(sink: &mut dyn Write, obj: &P) -> io::Result<()> {
    obj.render(sink)
}

/// Classifies a printable by its variant.
///
/// Known variants are matched exhaustively; no further action is taken.
#[must_use]
pub fn classify(obj: &dyn Printable) -> PrintableKind {
    let kind = obj.kind();
    match kind {
        PrintableKind::Concrete => debug!(?kind, "classified printable"),
    }
    kind
}

/// `Display` adapter over any [`Printable`].
pub struct Rendered<'a, P: ?Sized>(pub &'a P);

impl<P: Printable + ?Sized> fmt::Display for Rendered<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.0.render(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
