//! Minimal Go source writer.
//!
//! Builders describe declarations line by line; the writer owns indentation
//! (one tab per level) and the column alignment gofmt applies to struct
//! fields, so rendered text is already in canonical shape before it reaches
//! the formatter.

/// A struct field line: `name type [tag]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: String,
    tag: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
        }
    }

    /// Attach a struct tag; rendered between backquotes.
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

#[derive(Debug, Default)]
pub struct GoWriter {
    buf: String,
    indent: usize,
}

impl GoWriter {
    /// Start a file with its package clause.
    pub fn new(package: &str) -> Self {
        let mut w = Self::default();
        w.line(format!("package {package}"));
        w
    }

    pub fn blank(&mut self) -> &mut Self {
        if !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
        self
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.buf.push('\t');
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Write `text` and indent what follows.
    pub fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(text);
        self.indent += 1;
        self
    }

    /// Dedent and write `text`.
    pub fn close(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self.line(text)
    }

    /// Write aligned struct fields.
    ///
    /// Names are padded to the widest name. Types are padded only across
    /// consecutive tagged fields, as gofmt's tabwriter does, because an
    /// untagged field's type is the last cell of its line.
    pub fn fields(&mut self, fields: &[Field]) -> &mut Self {
        let name_width = fields
            .iter()
            .filter(|f| !f.ty.is_empty())
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut i = 0;
        while i < fields.len() {
            if fields[i].tag.is_none() {
                self.field_line(&fields[i], name_width, 0);
                i += 1;
                continue;
            }

            let run_end = fields[i..]
                .iter()
                .position(|f| f.tag.is_none())
                .map_or(fields.len(), |p| i + p);
            let type_width = fields[i..run_end]
                .iter()
                .map(|f| f.ty.chars().count())
                .max()
                .unwrap_or(0);
            for field in &fields[i..run_end] {
                self.field_line(field, name_width, type_width);
            }
            i = run_end;
        }
        self
    }

    fn field_line(&mut self, field: &Field, name_width: usize, type_width: usize) {
        let mut text = field.name.clone();
        if !field.ty.is_empty() {
            text.push_str(&pad(&field.name, name_width));
            text.push(' ');
            text.push_str(&field.ty);
            if let Some(tag) = &field.tag {
                text.push_str(&pad(&field.ty, type_width));
                text.push_str(" `");
                text.push_str(tag);
                text.push('`');
            }
        }
        self.line(text);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

fn pad(cell: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(cell.chars().count()))
}
