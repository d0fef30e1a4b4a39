use crate::ast;
use crate::printer::PrintError;
use crate::printer::PrintStyle;
use crate::printer::PrinterOptions;

type Result<T> = std::result::Result<T, PrintError>;

/// Renders a query [`ast::Document`] back into query-language source text.
///
/// Output is deterministic: the same document always prints to the same
/// bytes for a given set of [`PrinterOptions`].
#[derive(Clone, Debug, Default)]
pub struct GraphQLPrinter {
    options: PrinterOptions,
}

impl GraphQLPrinter {
    pub fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    pub fn print(&self, document: &ast::Document) -> Result<String> {
        let mut writer = PrintWriter::new(&self.options);
        writer.write_document(document)?;
        Ok(writer.buf)
    }

    pub fn print_value(&self, value: &ast::Value) -> String {
        let mut writer = PrintWriter::new(&self.options);
        writer.write_value(value);
        writer.buf
    }
}

struct PrintWriter<'opts> {
    buf: String,
    indent_level: usize,
    options: &'opts PrinterOptions,
}

impl<'opts> PrintWriter<'opts> {
    fn new(options: &'opts PrinterOptions) -> Self {
        Self {
            buf: String::with_capacity(1024),
            indent_level: 0,
            options,
        }
    }

    fn newline(&self) -> String {
        let indent = match self.options.style {
            PrintStyle::Canonical => self.indent_level * self.options.indent_width,
            PrintStyle::Legacy if self.indent_level > 0 => self.options.indent_width,
            PrintStyle::Legacy => 0,
        };
        format!("\n{}", " ".repeat(indent))
    }

    fn line(&mut self, count: usize) {
        for _ in 0..count {
            let newline = self.newline();
            self.buf.push_str(&newline);
        }
    }

    fn join<T>(
        &mut self,
        items: &[T],
        delimiter: &str,
        mut write_item: impl FnMut(&mut Self, &T),
    ) {
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.buf.push_str(delimiter);
            }
            write_item(self, item);
        }
    }

    fn write_document(&mut self, document: &ast::Document) -> Result<()> {
        for def in &document.definitions {
            match def {
                ast::Definition::Operation(op) => self.write_operation(op)?,
                ast::Definition::Fragment(frag) => self.write_fragment_definition(frag),
            }
            self.line(2);
        }
        self.line(1);
        Ok(())
    }

    fn write_operation(&mut self, op: &ast::OperationDefinition) -> Result<()> {
        match op {
            ast::OperationDefinition::SelectionSet(sel_set) =>
                self.write_selection_set(sel_set),

            ast::OperationDefinition::Query(query)
                if query.name.is_none()
                    && query.variable_definitions.is_empty()
                    && query.directives.is_empty() =>
                self.write_selection_set(&query.selection_set),

            ast::OperationDefinition::Query(query) => self.write_operation_parts(
                "query",
                query.name.as_deref(),
                &query.variable_definitions,
                &query.directives,
                &query.selection_set,
            ),

            ast::OperationDefinition::Mutation(mutation) => self.write_operation_parts(
                "mutation",
                mutation.name.as_deref(),
                &mutation.variable_definitions,
                &mutation.directives,
                &mutation.selection_set,
            ),

            ast::OperationDefinition::Subscription(_) =>
                return Err(PrintError::UnsupportedOperation("subscription")),
        }
        Ok(())
    }

    fn write_operation_parts(
        &mut self,
        keyword: &str,
        name: Option<&str>,
        var_defs: &[ast::VariableDefinition],
        directives: &[ast::Directive],
        sel_set: &ast::SelectionSet,
    ) {
        self.buf.push_str(keyword);
        self.buf.push(' ');
        if let Some(name) = name {
            self.buf.push_str(name);
        }
        if !var_defs.is_empty() {
            self.buf.push('(');
            self.join(var_defs, ", ", Self::write_variable_definition);
            self.buf.push(')');
        }
        if !directives.is_empty() {
            self.buf.push(' ');
            self.join(directives, " ", Self::write_directive);
            self.buf.push(' ');
        }
        self.buf.push(' ');
        self.write_selection_set(sel_set);
    }

    fn write_variable_definition(&mut self, var_def: &ast::VariableDefinition) {
        self.buf.push('$');
        self.buf.push_str(&var_def.name);
        self.buf.push_str(": ");
        self.write_type(&var_def.var_type);
        if let Some(default_value) = &var_def.default_value {
            self.buf.push_str(" = ");
            self.write_value(default_value);
        }
    }

    fn write_directive(&mut self, directive: &ast::Directive) {
        self.buf.push('@');
        self.buf.push_str(&directive.name);
        self.write_arguments(&directive.arguments);
    }

    fn write_arguments(&mut self, arguments: &[(String, ast::Value)]) {
        if arguments.is_empty() {
            return;
        }
        self.buf.push('(');
        self.join(arguments, ", ", |writer, (name, value)| {
            writer.buf.push_str(name);
            writer.buf.push_str(": ");
            writer.write_value(value);
        });
        self.buf.push(')');
    }

    fn write_selection_set(&mut self, sel_set: &ast::SelectionSet) {
        if sel_set.items.is_empty() {
            return;
        }
        self.buf.push('{');
        self.indent_level += 1;
        self.line(1);
        let delimiter = self.newline();
        self.join(&sel_set.items, &delimiter, Self::write_selection);
        self.indent_level -= 1;
        self.line(1);
        self.buf.push('}');
    }

    fn write_selection(&mut self, selection: &ast::Selection) {
        match selection {
            ast::Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    self.buf.push_str(alias);
                    self.buf.push_str(": ");
                }
                self.buf.push_str(&field.name);
                self.write_arguments(&field.arguments);
                self.join(&field.directives, " ", Self::write_directive);
                self.write_selection_set(&field.selection_set);
            },

            ast::Selection::FragmentSpread(spread) => {
                self.buf.push_str("...");
                self.buf.push_str(&spread.fragment_name);
                self.join(&spread.directives, " ", Self::write_directive);
            },

            ast::Selection::InlineFragment(inline_frag) => {
                self.buf.push_str("... ");
                if let Some(ast::TypeCondition::On(type_name)) = &inline_frag.type_condition {
                    self.buf.push_str("on ");
                    self.buf.push_str(type_name);
                    self.buf.push(' ');
                }
                self.join(&inline_frag.directives, " ", Self::write_directive);
                self.write_selection_set(&inline_frag.selection_set);
            },
        }
    }

    fn write_fragment_definition(&mut self, frag: &ast::FragmentDefinition) {
        let ast::TypeCondition::On(type_name) = &frag.type_condition;
        self.buf.push_str("fragment ");
        self.buf.push_str(&frag.name);
        self.buf.push_str(" on ");
        self.buf.push_str(type_name);
        if !frag.directives.is_empty() {
            self.buf.push(' ');
            self.join(&frag.directives, " ", Self::write_directive);
            self.buf.push(' ');
        }
        self.write_selection_set(&frag.selection_set);
    }

    fn write_type(&mut self, var_type: &ast::Type) {
        match var_type {
            ast::Type::NamedType(name) => self.buf.push_str(name),

            ast::Type::ListType(inner) => {
                self.buf.push('[');
                self.write_type(inner);
                self.buf.push(']');
            },

            ast::Type::NonNullType(inner) => {
                self.write_type(inner);
                self.buf.push('!');
            },
        }
    }

    fn write_value(&mut self, value: &ast::Value) {
        let legacy = self.options.style == PrintStyle::Legacy;
        match value {
            ast::Value::Variable(var_name) => {
                self.buf.push('$');
                self.buf.push_str(var_name);
            },

            ast::Value::Int(number) => {
                if let Some(int) = number.as_i64() {
                    self.buf.push_str(&int.to_string());
                }
            },

            // `{:?}` keeps a fractional part or exponent on every float, so
            // the literal never re-parses as an int.
            ast::Value::Float(float) => self.buf.push_str(&format!("{float:?}")),

            ast::Value::String(string) => {
                self.buf.push('"');
                if legacy {
                    self.buf.push_str(string);
                } else {
                    write_escaped(&mut self.buf, string);
                }
                self.buf.push('"');
            },

            ast::Value::Boolean(boolean) =>
                self.buf.push_str(if *boolean { "true" } else { "false" }),

            ast::Value::Null => self.buf.push_str("null"),

            ast::Value::Enum(name) => self.buf.push_str(name),

            ast::Value::List(items) => {
                if items.is_empty() && legacy {
                    return;
                }
                self.buf.push('[');
                self.join(items, ", ", Self::write_value);
                self.buf.push(']');
            },

            ast::Value::Object(fields) => {
                if fields.is_empty() && legacy {
                    return;
                }
                self.buf.push('{');
                let fields: Vec<_> = fields.iter().collect();
                self.join(&fields, ", ", |writer, (name, field_value)| {
                    writer.buf.push_str(name);
                    writer.buf.push_str(": ");
                    writer.write_value(field_value);
                });
                self.buf.push('}');
            },
        }
    }
}

fn write_escaped(buf: &mut String, string: &str) {
    for ch in string.chars() {
        match ch {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            ch if ch.is_control() => buf.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => buf.push(ch),
        }
    }
}
