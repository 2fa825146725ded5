// ==============================================================================
// Canonical Text Printer
// ==============================================================================
//
// Renders the model as IDL source. Output is deterministic: declarations are
// printed in insertion order and nothing is re-sorted. Every brace-delimited
// body goes through `indent` exactly once per body section, so nesting depth
// never affects the relative layout of a block.
//
// Layout rules:
//
// - Members of a body are printed one per line.
// - A message prints its fields, then its nested definitions; the two
//   sections and the definitions among themselves are separated by one blank
//   line.
// - A protocol prints the syntax line, the package, the imports, each
//   service, and each definition, all separated by one blank line.
// - Empty bodies collapse to `{}`.

use std::fmt::{self, Write as _};

use crate::model::definition::{Definition, Enumeration, Message};
use crate::model::field::{Field, Map, Member, OneOf, RepeatableField, TypedField};
use crate::model::protocol::{Import, Protocol};
use crate::model::reserved::{Reservation, ReservedLabels, ReservedNumber, ReservedNumbers};
use crate::model::service::{Rpc, Service};

/// The first line of every printed protocol.
pub const SYNTAX_HEADER: &str = "syntax = \"proto3\";";

const DEFAULT_INDENT_UNIT: &str = "  ";

/// Indent the lines of `text` by `unit` repeated `level` times and wrap the
/// result in one leading and one trailing newline.
///
/// Only non-empty lines receive the prefix. A blank line in `text` comes out
/// as a blank line with no indentation, so the result never carries trailing
/// whitespace. Empty input stays empty, so an empty body renders as `{}`.
///
/// ```
/// use protoschema::indent;
///
/// assert_eq!(indent("a;\nb;", 1, "  "), "\n  a;\n  b;\n");
/// assert_eq!(indent("a;\n\nb;", 1, "  "), "\n  a;\n\n  b;\n");
/// assert_eq!(indent("", 1, "  "), "");
/// ```
#[must_use]
pub fn indent(text: &str, level: usize, unit: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let prefix = unit.repeat(level);
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\n');
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(&prefix);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

// ==============================================================================
// Printer configuration
// ==============================================================================

/// Renders model values as IDL text.
///
/// Follows the non-consuming builder pattern: configuration methods take
/// `&mut self` and return `&mut Self`.
///
/// ```
/// use protoschema::{Message, Printer};
///
/// let message = Message::new("Empty")?;
/// assert_eq!(Printer::new().indent_unit("\t").print(&message), "message Empty {}");
/// # Ok::<(), protoschema::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printer {
    indent_unit: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// A printer indenting by two spaces per level.
    #[must_use]
    pub fn new() -> Self {
        Printer {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }

    /// Set the string repeated once per nesting level.
    pub fn indent_unit(&mut self, unit: impl Into<String>) -> &mut Self {
        self.indent_unit = unit.into();
        self
    }

    /// Render `item` as IDL text.
    #[must_use]
    pub fn print<T: Print + ?Sized>(&self, item: &T) -> String {
        item.print_with(self)
    }

    fn block(&self, body: &str) -> String {
        indent(body, 1, &self.indent_unit)
    }

    fn join<'a, T, I>(&self, items: I, separator: &str) -> String
    where
        T: Print + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items
            .into_iter()
            .map(|item| item.print_with(self))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// A model value with a canonical text form.
pub trait Print {
    fn print_with(&self, printer: &Printer) -> String;

    /// Render with the default [`Printer`].
    #[must_use]
    fn print(&self) -> String {
        self.print_with(&Printer::default())
    }
}

// ==============================================================================
// Fields
// ==============================================================================

fn field_text(label: &impl fmt::Display, number: u32, deprecated: bool) -> String {
    if deprecated {
        format!("{label} = {number} [deprecated=true];")
    } else {
        format!("{label} = {number};")
    }
}

impl Print for Field {
    fn print_with(&self, _: &Printer) -> String {
        field_text(&self.label, self.number, self.deprecated)
    }
}

impl Print for TypedField {
    fn print_with(&self, _: &Printer) -> String {
        format!(
            "{} {}",
            self.ty,
            field_text(&self.label, self.number, self.deprecated)
        )
    }
}

impl Print for RepeatableField {
    fn print_with(&self, _: &Printer) -> String {
        let repeated = if self.repeated { "repeated " } else { "" };
        format!(
            "{repeated}{} {}",
            self.ty,
            field_text(&self.label, self.number, self.deprecated)
        )
    }
}

impl Print for Map {
    fn print_with(&self, _: &Printer) -> String {
        format!(
            "map<{}, {}> {}",
            self.key_type.as_str(),
            self.value_type(),
            field_text(&self.label, self.number, self.deprecated)
        )
    }
}

impl Print for OneOf {
    fn print_with(&self, printer: &Printer) -> String {
        let body = printer.join(&self.fields, "\n");
        format!("oneof {} {{{}}}", self.label, printer.block(&body))
    }
}

impl Print for Member {
    fn print_with(&self, printer: &Printer) -> String {
        match self {
            Member::Field(f) => f.print_with(printer),
            Member::Typed(f) => f.print_with(printer),
            Member::Repeatable(f) => f.print_with(printer),
            Member::Map(m) => m.print_with(printer),
            Member::OneOf(o) => o.print_with(printer),
            Member::Reserved(r) => r.print_with(printer),
        }
    }
}

// ==============================================================================
// Reservations
// ==============================================================================

impl Print for ReservedNumbers {
    fn print_with(&self, _: &Printer) -> String {
        let entries = self
            .numbers
            .iter()
            .map(|n| match n {
                ReservedNumber::Single(n) => n.to_string(),
                ReservedNumber::Range(r) => format!("{} to {}", r.start(), r.end()),
            })
            .collect::<Vec<_>>();
        format!("reserved {};", entries.join(", "))
    }
}

impl Print for ReservedLabels {
    fn print_with(&self, _: &Printer) -> String {
        let entries = self
            .labels
            .iter()
            .map(|l| format!("\"{l}\""))
            .collect::<Vec<_>>();
        format!("reserved {};", entries.join(", "))
    }
}

impl Print for Reservation {
    fn print_with(&self, printer: &Printer) -> String {
        match self {
            Reservation::Numbers(n) => n.print_with(printer),
            Reservation::Labels(l) => l.print_with(printer),
        }
    }
}

// ==============================================================================
// Definitions
// ==============================================================================

impl Print for Enumeration {
    fn print_with(&self, printer: &Printer) -> String {
        let mut lines = Vec::with_capacity(self.fields.len() + 1);
        // protoc rejects `allow_alias` on an enumeration without aliases.
        if self.allow_alias && self.is_aliased() {
            lines.push("option allow_alias = true;".to_string());
        }
        lines.extend(self.fields.iter().map(|f| f.print_with(printer)));
        format!("enum {} {{{}}}", self.label, printer.block(&lines.join("\n")))
    }
}

impl Print for Message {
    fn print_with(&self, printer: &Printer) -> String {
        let fields = printer.join(&self.fields, "\n");
        let definitions = printer.join(&self.container.definitions, "\n\n");
        format!(
            "message {} {{{}{}}}",
            self.label,
            printer.block(&fields),
            printer.block(&definitions)
        )
    }
}

impl Print for Definition {
    fn print_with(&self, printer: &Printer) -> String {
        match self {
            Definition::Message(m) => m.print_with(printer),
            Definition::Enumeration(e) => e.print_with(printer),
        }
    }
}

// ==============================================================================
// Services
// ==============================================================================

impl Print for Rpc {
    fn print_with(&self, _: &Printer) -> String {
        let stream = |on: bool| if on { "stream " } else { "" };
        format!(
            "rpc {} ({}{}) returns ({}{});",
            self.label,
            stream(self.stream_request),
            self.request().label(),
            stream(self.stream_response),
            self.response().label()
        )
    }
}

impl Print for Service {
    fn print_with(&self, printer: &Printer) -> String {
        let body = printer.join(&self.rpcs, "\n");
        format!("service {} {{{}}}", self.label, printer.block(&body))
    }
}

// ==============================================================================
// Protocol
// ==============================================================================

impl Print for Import {
    fn print_with(&self, _: &Printer) -> String {
        let public = if self.public { "public " } else { "" };
        format!("import {public}\"{}\";", Escaped(&self.path))
    }
}

impl Print for Protocol {
    fn print_with(&self, printer: &Printer) -> String {
        tracing::trace!(
            package = self.package.as_ref().map(|p| p.as_str()),
            imports = self.imports.len(),
            services = self.services.len(),
            definitions = self.container.definitions.len(),
            "printing protocol"
        );

        let mut sections = vec![SYNTAX_HEADER.to_string()];
        if let Some(package) = &self.package {
            sections.push(format!("package {package};"));
        }
        if !self.imports.is_empty() {
            sections.push(printer.join(&self.imports, "\n"));
        }
        sections.extend(self.services.iter().map(|s| s.print_with(printer)));
        sections.extend(
            self.container
                .definitions
                .iter()
                .map(|d| d.print_with(printer)),
        );
        sections.join("\n\n")
    }
}

/// Escapes a string for use inside a double-quoted IDL string literal.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '\t' => f.write_str("\\t")?,
                '\r' => f.write_str("\\r")?,
                '\n' => f.write_str("\\n")?,
                '\\' => f.write_str("\\\\")?,
                '\'' => f.write_str("\\'")?,
                '"' => f.write_str("\\\"")?,
                c if c.is_control() => {
                    let mut buf = [0; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        write!(f, "\\{byte:03o}")?;
                    }
                }
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

macro_rules! display_via_printer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.print())
                }
            }
        )*
    };
}

display_via_printer!(
    Field,
    TypedField,
    RepeatableField,
    Map,
    OneOf,
    Member,
    ReservedNumbers,
    ReservedLabels,
    Reservation,
    Enumeration,
    Message,
    Definition,
    Rpc,
    Service,
    Import,
    Protocol,
);
