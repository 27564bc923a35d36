//! Lossless writer for the document model.
//!
//! Unedited entries are copied from the loaded text by span, so a document
//! that was only read renders byte-for-byte as it was loaded. Edited entries
//! are rebuilt from their stored pieces (leading trivia, keyword, gaps,
//! literal), which keeps the surrounding comments and indentation intact.


use indexmap::IndexMap;
use text_size::TextRange;

use crate::base::FileId;
use crate::error::{EntryKind, MenuError, Result};
use crate::model::{Body, Document, Item, Menu, Node, Parameter};

/// Render the text of one file of `document`
pub fn render_file(document: &Document, file: FileId) -> Result<String> {
    let source = document
        .file(file)
        .ok_or_else(|| MenuError::not_found(EntryKind::File, file.to_string()))?;
    let mut printer = Printer::new(Some(source.text()));
    for menu in document.menus_in(file) {
        printer.menu(menu);
    }
    printer.push(source.trailing());
    Ok(printer.finish())
}

/// Render every file, keyed by file in the order the files first receive a
/// menu. Files whose menus were all removed come last.
pub fn render_files(document: &Document) -> IndexMap<FileId, String> {
    let mut printers: IndexMap<FileId, Printer<'_>> = IndexMap::new();
    for menu in document.menus() {
        let file = menu.file();
        printers
            .entry(file)
            .or_insert_with(|| Printer::new(document.file(file).map(|s| s.text())))
            .menu(menu);
    }
    for (index, source) in document.files().iter().enumerate() {
        printers
            .entry(FileId::new(index as u32))
            .or_insert_with(|| Printer::new(Some(source.text())));
    }

    printers
        .into_iter()
        .map(|(file, mut printer)| {
            if let Some(source) = document.file(file) {
                printer.push(source.trailing());
            }
            (file, printer.finish())
        })
        .collect()
}

/// Render all files concatenated in file order
pub fn render_document(document: &Document) -> String {
    let mut files: Vec<(FileId, String)> = render_files(document).into_iter().collect();
    files.sort_by_key(|(file, _)| *file);
    files.into_iter().map(|(_, text)| text).collect()
}

/// Render one menu from its keyword to its closing brace
pub fn render_menu(document: &Document, menu: &Menu) -> String {
    let source = document.file(menu.file()).map(|s| s.text());
    let mut printer = Printer::new(source);
    printer.menu_text(menu);
    printer.finish()
}

/// Appends entries to an output buffer, copying pristine spans from `source`
struct Printer<'a> {
    out: String,
    source: Option<&'a str>,
}

impl<'a> Printer<'a> {
    fn new(source: Option<&'a str>) -> Self {
        Self {
            out: String::with_capacity(source.map_or(0, str::len)),
            source,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Copy `span` from the loaded text if the entry is unedited
    fn copy(&mut self, pristine: bool, span: Option<TextRange>) -> bool {
        if !pristine {
            return false;
        }
        let text = span.and_then(|span| {
            self.source
                .and_then(|s| s.get(usize::from(span.start())..usize::from(span.end())))
        });
        match text {
            Some(text) => {
                self.out.push_str(text);
                true
            }
            None => false,
        }
    }

    fn menu(&mut self, menu: &Menu) {
        self.push(menu.leading());
        self.menu_text(menu);
    }

    fn menu_text(&mut self, menu: &Menu) {
        if self.copy(menu.is_pristine(), menu.span()) {
            return;
        }
        self.push(menu.keyword());
        self.push(menu.keyword_gap());
        self.push(menu.name());
        self.push(menu.name_gap());
        self.body(menu.body());
    }

    fn node(&mut self, node: &Node) {
        self.push(node.leading());
        if self.copy(node.is_pristine(), node.span()) {
            return;
        }
        if let Some(behaviour) = node.behaviour() {
            self.push(behaviour);
            self.push(node.behaviour_gap());
        }
        self.push(node.name());
        self.push(node.name_gap());
        self.body(node.body());
    }

    fn param(&mut self, param: &Parameter) {
        self.push(param.leading());
        if self.copy(param.is_pristine(), param.span()) {
            return;
        }
        self.push(param.key());
        self.push(param.separator());
        self.push(param.raw());
    }

    fn body(&mut self, body: &Body) {
        self.push("{");
        for item in body.items() {
            match item {
                Item::Param(param) => self.param(param),
                Item::Node(node) => self.node(node),
            }
        }
        self.push(body.trailing());
        self.push("}");
    }
}
