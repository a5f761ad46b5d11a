//! Rust source printer for accessor IR.
//!
//! The target type is expected to be a tuple newtype over its representation,
//! e.g. `pub struct Day(pub i64);`. For each table the printer emits the
//! constant data, an inherent `name()` accessor, a `Display` impl and, when the
//! IR carries a parser, `from_name()`.

use crate::transforms::ir::*;

pub struct SourcePrinter {
    output: String,
    indent_level: usize,
}

impl Default for SourcePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourcePrinter {
    pub fn new() -> Self {
        SourcePrinter {
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Print a whole generated file: header, imports, then every table.
    pub fn emit_file(tables: &[EnumTableIR], invocation: &str) -> String {
        let mut printer = SourcePrinter::new();
        printer.write(&format!(
            "// Code generated by \"enumtab {invocation}\"; DO NOT EDIT."
        ));
        printer.write_line();
        printer.write_line();
        printer.emit_imports(tables);
        for table in tables {
            printer.write_line();
            printer.emit_table(table);
        }
        printer.output
    }

    /// Print one table without file header or imports.
    pub fn emit_to_string(table: &EnumTableIR) -> String {
        let mut printer = SourcePrinter::new();
        printer.emit_table(table);
        printer.output
    }

    fn emit_imports(&mut self, tables: &[EnumTableIR]) {
        self.write("use std::borrow::Cow;");
        self.write_line();
        if tables.iter().any(EnumTableIR::is_sparse) {
            self.write("use std::collections::HashMap;");
            self.write_line();
            self.write("use std::sync::OnceLock;");
            self.write_line();
        }
    }

    pub fn emit_table(&mut self, table: &EnumTableIR) {
        for decl in &table.decls {
            self.emit_decl(table, decl);
        }
        if !table.decls.is_empty() {
            self.write_line();
        }

        self.write(&format!("impl {} {{", table.type_name));
        self.write_line();
        self.increase_indent();
        self.emit_stringer(table);
        if let Some(parser) = &table.parser {
            self.write_line();
            self.emit_parser(table, parser);
        }
        self.decrease_indent();
        self.write("}");
        self.write_line();
        self.write_line();
        self.emit_display(table);
    }

    // =========================================================================
    // Table data
    // =========================================================================

    fn emit_decl(&mut self, table: &EnumTableIR, decl: &TableDecl) {
        match decl {
            TableDecl::NameBlob { ident, text } => {
                self.write(&format!("const {ident}: &str = {text:?};"));
                self.write_line();
            }
            TableDecl::Index {
                ident,
                width,
                offsets,
            } => {
                let list = offsets
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.write(&format!(
                    "const {ident}: [{}; {}] = [{list}];",
                    width.rust_name(),
                    offsets.len()
                ));
                self.write_line();
            }
            TableDecl::SparseMap {
                ident,
                blob,
                entries,
            } => self.emit_sparse_map(table, ident, blob, entries),
        }
    }

    fn emit_sparse_map(
        &mut self,
        table: &EnumTableIR,
        ident: &str,
        blob: &str,
        entries: &[SparseEntry],
    ) {
        let repr = table.kind.rust_name();
        self.write_line();
        self.write(&format!(
            "static {ident}: OnceLock<HashMap<{repr}, &'static str>> = OnceLock::new();"
        ));
        self.write_line();
        self.write_line();
        self.write(&format!(
            "fn {}() -> &'static HashMap<{repr}, &'static str> {{",
            map_fn(ident)
        ));
        self.write_line();
        self.increase_indent();
        self.write_indent();
        self.write(&format!("{ident}.get_or_init(|| {{"));
        self.write_line();
        self.increase_indent();
        self.write_indent();
        self.write("HashMap::from([");
        self.write_line();
        self.increase_indent();
        for entry in entries {
            self.write_indent();
            self.write(&format!(
                "({}, &{blob}[{}..{}]),",
                entry.value, entry.start, entry.end
            ));
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("])");
        self.write_line();
        self.decrease_indent();
        self.write_indent();
        self.write("})");
        self.write_line();
        self.decrease_indent();
        self.write("}");
        self.write_line();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    fn emit_stringer(&mut self, table: &EnumTableIR) {
        self.write_indent();
        self.write("pub fn name(self) -> Cow<'static, str> {");
        self.write_line();
        self.increase_indent();

        match &table.stringer {
            StringerIR::Indexed { lo, hi, slice } => {
                self.write_indent();
                self.write("match self.0 {");
                self.write_line();
                self.increase_indent();
                self.emit_slice_arm(table, &format!("i @ {lo}..={hi}"), slice);
                self.emit_unknown_arm(&table.unknown);
                self.decrease_indent();
                self.write_indent();
                self.write("}");
                self.write_line();
            }
            StringerIR::Dispatch { arms } => {
                self.write_indent();
                self.write("match self.0 {");
                self.write_line();
                self.increase_indent();
                for arm in arms {
                    match (&arm.test, &arm.action) {
                        (RangeTest::Equals(v), ArmAction::Whole { blob }) => {
                            self.write_indent();
                            self.write(&format!("{v} => Cow::Borrowed({blob}),"));
                            self.write_line();
                        }
                        (test, ArmAction::Slice(slice)) => {
                            let (lo, hi) = test.bounds();
                            self.emit_slice_arm(table, &format!("i @ {lo}..={hi}"), slice);
                        }
                        (RangeTest::Between { lo, hi }, ArmAction::Whole { blob }) => {
                            self.write_indent();
                            self.write(&format!("{lo}..={hi} => Cow::Borrowed({blob}),"));
                            self.write_line();
                        }
                    }
                }
                self.emit_unknown_arm(&table.unknown);
                self.decrease_indent();
                self.write_indent();
                self.write("}");
                self.write_line();
            }
            StringerIR::Lookup { map } => {
                self.write_indent();
                self.write(&format!("match {}().get(&self.0) {{", map_fn(map)));
                self.write_line();
                self.increase_indent();
                self.write_indent();
                self.write("Some(&name) => Cow::Borrowed(name),");
                self.write_line();
                self.write_indent();
                self.write(&format!(
                    "None => Cow::Owned(format!(\"{}({{}})\", self.0)),",
                    table.unknown.type_name
                ));
                self.write_line();
                self.decrease_indent();
                self.write_indent();
                self.write("}");
                self.write_line();
            }
        }

        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
    }

    fn emit_slice_arm(&mut self, table: &EnumTableIR, pattern: &str, slice: &IndexedSlice) {
        self.write_indent();
        self.write(&format!("{pattern} => {{"));
        self.write_line();
        self.increase_indent();
        self.write_indent();
        self.write(&format!("let i = {};", index_expr(table, slice.offset)));
        self.write_line();
        self.write_indent();
        self.write(&format!(
            "Cow::Borrowed(&{blob}[{index}[i] as usize..{index}[i + 1] as usize])",
            blob = slice.blob,
            index = slice.index
        ));
        self.write_line();
        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
    }

    fn emit_unknown_arm(&mut self, unknown: &UnknownFormat) {
        self.write_indent();
        self.write(&format!(
            "i => Cow::Owned(format!(\"{}({{i}})\")),",
            unknown.type_name
        ));
        self.write_line();
    }

    fn emit_parser(&mut self, table: &EnumTableIR, parser: &ParserIR) {
        self.write_indent();
        self.write("pub fn from_name(s: &str) -> Option<Self> {");
        self.write_line();
        self.increase_indent();
        self.write_indent();
        match parser {
            ParserIR::ScanSpans { spans } if spans.is_empty() => {
                self.write("let _ = s;");
                self.write_line();
                self.write_indent();
                self.write("None");
            }
            ParserIR::ScanSpans { spans } => {
                let repr = table.kind.rust_name();
                let mut chain = String::new();
                for (n, (lo, hi)) in spans.iter().enumerate() {
                    if n == 0 {
                        chain.push_str(&format!("({lo}{repr}..={hi})"));
                    } else {
                        chain.push_str(&format!(".chain({lo}..={hi})"));
                    }
                }
                self.write(&format!(
                    "{chain}.map(Self).find(|v| Self(v.0).name() == s)"
                ));
            }
            ParserIR::ScanMap { map } => {
                self.write(&format!(
                    "{}().iter().find(|&(_, &name)| name == s).map(|(&value, _)| Self(value))",
                    map_fn(map)
                ));
            }
        }
        self.write_line();
        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
    }

    fn emit_display(&mut self, table: &EnumTableIR) {
        let name = &table.type_name;
        self.write(&format!("impl std::fmt::Display for {name} {{"));
        self.write_line();
        self.increase_indent();
        self.write_indent();
        self.write("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        self.write_line();
        self.increase_indent();
        self.write_indent();
        self.write("f.write_str(&Self(self.0).name())");
        self.write_line();
        self.decrease_indent();
        self.write_indent();
        self.write("}");
        self.write_line();
        self.decrease_indent();
        self.write("}");
        self.write_line();
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str("    ");
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }
}

/// Position of `i` inside a run starting at `offset`.
///
/// The arm pattern guarantees `offset <= i`, but for signed kinds `i - offset`
/// can exceed the type's maximum, so the subtraction happens in `i128`.
fn index_expr(table: &EnumTableIR, offset: i128) -> String {
    match (offset, table.kind.is_signed()) {
        (0, _) => "i as usize".to_string(),
        (_, false) => format!("i.wrapping_sub({offset}) as usize"),
        (o, true) if o < 0 => format!("(i as i128 + {}) as usize", o.unsigned_abs()),
        (o, true) => format!("(i as i128 - {o}) as usize"),
    }
}

/// `PRIME_MAP` -> `prime_map`
fn map_fn(ident: &str) -> String {
    ident.to_lowercase()
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod tests;
