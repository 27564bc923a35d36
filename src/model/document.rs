use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::layout;
use super::lower::lower_file;
use super::menu::{Menu, valid_name};
use super::node::Node;
use crate::base::FileId;
use crate::error::{EntryKind, MenuError, Result};
use crate::project::{DuplicatePolicy, MenuLoader, SaveOptions};

/// One source file of a document
#[derive(Debug, Clone)]
pub struct SourceText {
    path: Option<PathBuf>,
    text: Arc<str>,
    trailing: String,
}

impl SourceText {
    /// Path the file was loaded from, `None` for in-memory text
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Text as loaded
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Trivia after the last menu of the file
    pub(crate) fn trailing(&self) -> &str {
        &self.trailing
    }
}

/// The set of menus loaded from one or more files.
///
/// Menus keep the order they were loaded in. Each remembers the file it came
/// from, and saving writes every file back with only edited entries
/// regenerated.
#[derive(Debug, Clone, Default)]
pub struct Document {
    menus: Vec<Menu>,
    /// Menu name -> position in `menus`
    index: FxHashMap<SmolStr, usize>,
    files: Vec<SourceText>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from in-memory text. It renders like a loaded file
    /// but cannot be saved.
    pub fn parse_str(text: &str) -> Result<Self> {
        let mut document = Self::new();
        document.attach(None, text.to_string(), DuplicatePolicy::Strict)?;
        Ok(document)
    }

    /// Load a single file with default options
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        MenuLoader::new().load_file(path)
    }

    /// Load every file matching `pattern` (e.g. `base/ufos/menu_*.ufo`)
    /// with default options
    pub fn load_all(pattern: impl AsRef<Path>) -> Result<Self> {
        MenuLoader::new().load_all(pattern)
    }

    /// Text of every file, concatenated in load order
    pub fn render(&self) -> String {
        crate::serializer::render_document(self)
    }

    /// Text `file` would be saved with
    pub fn render_file(&self, file: FileId) -> Result<String> {
        crate::serializer::render_file(self, file)
    }

    /// Write every loaded file back in place
    pub fn save(&self) -> Result<Vec<PathBuf>> {
        crate::project::save(self, &SaveOptions::default())
    }

    /// Add the menus of `text` as a new file.
    ///
    /// Nothing is added if the text fails to parse or, under
    /// [`DuplicatePolicy::Strict`], redefines a known menu.
    pub(crate) fn attach(
        &mut self,
        path: Option<PathBuf>,
        text: String,
        policy: DuplicatePolicy,
    ) -> Result<FileId> {
        if let Some(path) = &path {
            if self.file_id(path).is_some() {
                return Err(MenuError::AlreadyLoaded { path: path.clone() });
            }
        }

        let file = FileId::new(self.files.len() as u32);
        let lowered = lower_file(&text, file)?;
        if policy == DuplicatePolicy::Strict {
            if let Some(menu) = lowered.menus.iter().find(|m| self.has_menu(m.name())) {
                return Err(MenuError::DuplicateName {
                    scope: "document".to_string(),
                    name: menu.name().to_string(),
                });
            }
        }

        debug!(
            file = %file,
            path = ?path,
            menus = lowered.menus.len(),
            "attached source file"
        );
        self.files.push(SourceText {
            path,
            text: Arc::from(text),
            trailing: lowered.trailing,
        });
        for menu in lowered.menus {
            if self.index.contains_key(menu.name()) {
                warn!(menu = menu.name(), file = %file, "menu redefined, later definition wins");
            }
            self.index.insert(SmolStr::new(menu.name()), self.menus.len());
            self.menus.push(menu);
        }
        Ok(file)
    }

    // =========================================================================
    // Files
    // =========================================================================

    pub fn files(&self) -> &[SourceText] {
        &self.files
    }

    pub fn file(&self, file: FileId) -> Option<&SourceText> {
        self.files.get(file.index())
    }

    pub fn file_id(&self, path: &Path) -> Option<FileId> {
        self.files
            .iter()
            .position(|f| f.path.as_deref() == Some(path))
            .map(|i| FileId::new(i as u32))
    }

    /// Menus that are written to `file`, in document order
    pub fn menus_in(&self, file: FileId) -> impl Iterator<Item = &Menu> {
        self.menus.iter().filter(move |m| m.file() == file)
    }

    // =========================================================================
    // Menus
    // =========================================================================

    /// Every menu in load order, shadowed duplicates included
    pub fn menus(&self) -> impl Iterator<Item = &Menu> {
        self.menus.iter()
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    pub fn has_menu(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn menu(&self, name: &str) -> Result<&Menu> {
        self.index
            .get(name)
            .and_then(|&i| self.menus.get(i))
            .ok_or_else(|| MenuError::not_found(EntryKind::Menu, name))
    }

    pub fn menu_mut(&mut self, name: &str) -> Result<&mut Menu> {
        self.index
            .get(name)
            .and_then(|&i| self.menus.get_mut(i))
            .ok_or_else(|| MenuError::not_found(EntryKind::Menu, name))
    }

    /// Append an empty menu to the end of `file`
    pub fn add_menu(&mut self, name: &str, file: FileId) -> Result<&mut Menu> {
        let name = valid_name(EntryKind::Menu, name)?;
        if self.has_menu(&name) {
            return Err(MenuError::DuplicateName {
                scope: "document".to_string(),
                name: name.to_string(),
            });
        }
        let source = self
            .file(file)
            .ok_or_else(|| MenuError::not_found(EntryKind::File, file.to_string()))?;
        let line_break = layout::line_break(source.text());
        let leading = if self.menus_in(file).next().is_some() {
            format!("{}{}", line_break, line_break)
        } else {
            String::new()
        };

        trace!(menu = %name, file = %file, "add menu");
        let menu = Menu::new(name.clone(), file, leading, line_break);
        let index = self.menus.len();
        self.menus.push(menu);
        self.index.insert(name, index);
        Ok(&mut self.menus[index])
    }

    /// Remove a menu and all of its nodes
    pub fn remove_menu(&mut self, name: &str) -> Result<Menu> {
        let index = *self
            .index
            .get(name)
            .ok_or_else(|| MenuError::not_found(EntryKind::Menu, name))?;
        trace!(menu = name, "remove menu");
        let menu = self.menus.remove(index);
        self.reindex();
        Ok(menu)
    }

    pub fn rename_menu(&mut self, old: &str, new: &str) -> Result<()> {
        let index = *self
            .index
            .get(old)
            .ok_or_else(|| MenuError::not_found(EntryKind::Menu, old))?;
        if self.has_menu(new) {
            return Err(MenuError::DuplicateName {
                scope: "document".to_string(),
                name: new.to_string(),
            });
        }
        let new = valid_name(EntryKind::Menu, new)?;
        trace!(old, new = %new, "rename menu");
        self.menus[index].set_name(new);
        self.reindex();
        Ok(())
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Every node of every menu, paired with its menu
    pub fn nodes(&self) -> impl Iterator<Item = (&Menu, &Node)> {
        self.menus
            .iter()
            .flat_map(|menu| menu.children().map(move |node| (menu, node)))
    }

    /// Resolve a `menu.node` path
    pub fn node_by_path(&self, path: &str) -> Result<&Node> {
        let (menu, node) = split_path(path)?;
        self.menu(menu)?.child(node)
    }

    pub fn node_by_path_mut(&mut self, path: &str) -> Result<&mut Node> {
        let (menu, node) = split_path(path)?;
        self.menu_mut(menu)?.child_mut(node)
    }

    /// Number of nodes per behaviour, in order of first appearance.
    /// Nodes without a behaviour are not counted.
    pub fn behaviour_counts(&self) -> IndexMap<SmolStr, usize> {
        let mut counts = IndexMap::new();
        for (_, node) in self.nodes() {
            if let Some(behaviour) = node.behaviour() {
                *counts.entry(SmolStr::new(behaviour)).or_insert(0) += 1;
            }
        }
        counts
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, menu) in self.menus.iter().enumerate() {
            self.index.insert(SmolStr::new(menu.name()), i);
        }
    }
}

fn split_path(path: &str) -> Result<(&str, &str)> {
    path.split_once('.')
        .filter(|(menu, node)| !menu.is_empty() && !node.is_empty())
        .ok_or_else(|| MenuError::not_found(EntryKind::Node, path))
}
