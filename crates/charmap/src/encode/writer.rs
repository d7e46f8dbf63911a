/// Accumulates indented source lines.
pub struct LineWriter {
    out: String,
    indent_cache: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, indent: usize) {
        if indent == 0 {
            return;
        }
        if self.indent_cache.len() < indent {
            self.indent_cache
                .extend(core::iter::repeat_n(' ', indent - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..indent]);
    }

    pub fn line(&mut self, indent: usize, s: &str) {
        self.write_indent(indent);
        self.out.push_str(s);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Writes `items` joined by `", "`, wrapping so that no line carries more
    /// than `per_line` items. Every line but the last ends with a comma.
    pub fn wrapped_list(&mut self, indent: usize, items: &[String], per_line: usize) {
        let per_line = per_line.max(1);
        let chunks = items.chunks(per_line);
        let count = chunks.len();
        for (i, chunk) in chunks.enumerate() {
            let mut s = chunk.join(", ");
            if i + 1 < count {
                s.push(',');
            }
            self.line(indent, &s);
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
