/// Accumulates the minified request text produced by a serialization pass.
pub(crate) struct WireFormatter {
    buf: String,
}
impl WireFormatter {
    pub(crate) fn write_str(&mut self, str: &str) {
        self.buf.push_str(str)
    }

    pub(crate) fn write_char(&mut self, char: char) {
        self.buf.push(char)
    }

    pub(crate) fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}
impl Default for WireFormatter {
    fn default() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }
}

/// Writes the minified wire representation of a type into a
/// [`WireFormatter`].
pub(crate) trait WireFormat {
    fn write_wire(&self, f: &mut WireFormatter);
}

impl<T: WireFormat> WireFormat for &T {
    fn write_wire(&self, f: &mut WireFormatter) {
        (*self).write_wire(f)
    }
}

/// Writes `items` joined by `,` with no trailing separator.
pub(crate) fn write_comma_joined<I>(f: &mut WireFormatter, items: I)
where
    I: IntoIterator,
    I::Item: WireFormat,
{
    let mut first = true;
    for item in items {
        if !first {
            f.write_char(',');
        }
        item.write_wire(f);
        first = false;
    }
}

/// Renders a [`WireFormat`] value through a [`std::fmt::Formatter`], for
/// `Display` impls.
pub(crate) fn fmt_wire(
    value: &impl WireFormat,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let mut wire = WireFormatter::default();
    value.write_wire(&mut wire);
    f.write_str(wire.as_str())
}
