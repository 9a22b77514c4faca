//! Structured PHP source file builder.
//!
//! Callers describe a file (namespace, class, constants, properties,
//! methods with bodies) and render it to source text: tab indentation,
//! `/** */` docblocks, members ordered constants, properties, methods.

use crate::codegen::utils::escape_php_string;

/// One PHP source file holding a namespace declaration and its classes
#[derive(Debug, Clone, Default)]
pub struct PhpFile {
    pub namespace: String,
    pub classes: Vec<PhpClass>,
}

impl PhpFile {
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        PhpFile {
            namespace: namespace.into(),
            classes: Vec::new(),
        }
    }

    pub fn add_class(&mut self, class: PhpClass) {
        self.classes.push(class);
    }

    /// Render the whole file, trailing newline included
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?php\n\n");
        out.push_str(&format!("namespace {};\n", self.namespace));
        for class in &self.classes {
            out.push('\n');
            out.push_str(&class.render());
        }
        out
    }
}

/// A class definition: constants, properties and methods render in that
/// order no matter when they were added
#[derive(Debug, Clone, Default)]
pub struct PhpClass {
    pub name: String,
    /// Parent class, rendered verbatim (pass a fully qualified name)
    pub extends: Option<String>,
    pub constants: Vec<PhpConstant>,
    pub properties: Vec<PhpProperty>,
    pub methods: Vec<PhpMethod>,
}

impl PhpClass {
    pub fn new<S: Into<String>>(name: S) -> Self {
        PhpClass {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_constant<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.constants.push(PhpConstant {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn add_property(&mut self, property: PhpProperty) {
        self.properties.push(property);
    }

    pub fn add_method(&mut self, method: PhpMethod) {
        self.methods.push(method);
    }

    fn render(&self) -> String {
        let mut out = String::new();
        match &self.extends {
            Some(parent) => out.push_str(&format!("class {} extends {}\n", self.name, parent)),
            None => out.push_str(&format!("class {}\n", self.name)),
        }
        out.push_str("{\n");

        let mut blocks: Vec<String> = Vec::new();
        if !self.constants.is_empty() {
            let mut block = String::new();
            for constant in &self.constants {
                block.push_str(&format!(
                    "\tconst {} = '{}';\n",
                    constant.name,
                    escape_php_string(&constant.value)
                ));
            }
            blocks.push(block);
        }
        for property in &self.properties {
            blocks.push(property.render());
        }
        for method in &self.methods {
            blocks.push(method.render());
        }
        out.push_str(&blocks.join("\n"));

        out.push_str("}\n");
        out
    }
}

/// A class constant with a string value; the value is escaped at render time
#[derive(Debug, Clone)]
pub struct PhpConstant {
    pub name: String,
    pub value: String,
}

/// A public property, optionally typed and documented
#[derive(Debug, Clone, Default)]
pub struct PhpProperty {
    pub name: String,
    /// Nullable type hint like `?int`; untyped when `None`
    pub type_hint: Option<String>,
    /// Single `@var ...` docblock line
    pub doc: Option<String>,
}

impl PhpProperty {
    pub fn new<S: Into<String>>(name: S) -> Self {
        PhpProperty {
            name: name.into(),
            ..Default::default()
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(doc) = &self.doc {
            out.push_str(&format!("\t/** {} */\n", doc));
        }
        match &self.type_hint {
            // PHP throws on reading an uninitialized typed property
            Some(hint) => out.push_str(&format!("\tpublic {} ${} = null;\n", hint, self.name)),
            None => out.push_str(&format!("\tpublic ${};\n", self.name)),
        }
        out
    }
}

/// A method with docblock lines and raw body lines (indented two tabs
/// when rendered; body lines carry any further nesting themselves)
#[derive(Debug, Clone)]
pub struct PhpMethod {
    pub name: String,
    pub visibility: String,
    pub is_static: bool,
    /// Parameter list entries rendered verbatim, e.g. `$column`
    pub params: Vec<String>,
    pub doc: Vec<String>,
    pub body: Vec<String>,
}

impl PhpMethod {
    pub fn new<S: Into<String>>(name: S) -> Self {
        PhpMethod {
            name: name.into(),
            visibility: "public".to_string(),
            is_static: false,
            params: Vec::new(),
            doc: Vec::new(),
            body: Vec::new(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if !self.doc.is_empty() {
            out.push_str("\t/**\n");
            for line in &self.doc {
                out.push_str(&format!("\t * {}\n", line));
            }
            out.push_str("\t */\n");
        }
        let keyword = if self.is_static {
            format!("{} static function", self.visibility)
        } else {
            format!("{} function", self.visibility)
        };
        out.push_str(&format!(
            "\t{} {}({})\n",
            keyword,
            self.name,
            self.params.join(", ")
        ));
        out.push_str("\t{\n");
        for line in &self.body {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("\t\t{}\n", line));
            }
        }
        out.push_str("\t}\n");
        out
    }
}
