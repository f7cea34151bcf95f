//! Line dispatch for the interactive shell.

use std::path::PathBuf;

use vox_catalog::Catalog;

/// What a dispatched line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Lines to print.
    Text(String),
    /// Nothing to print.
    None,
    /// The session is over.
    Quit,
}

/// The interactive shell: a catalog plus its save target.
pub struct Shell {
    catalog: Catalog,
    source: PathBuf,
    auto_save: bool,
}

const HELP: &str = "\
select <key>      enter a category (at home) or speak an item
add <key> <text>  add a category (at home) or an item (in a category)
list              image keys on the current page
where             current category name
home              back to the category list
save [path]       write the board file
help              this text
quit              exit (auto-saves when enabled)";

impl Shell {
    pub fn new(catalog: Catalog, source: PathBuf, auto_save: bool) -> Self {
        Self {
            catalog,
            source,
            auto_save,
        }
    }

    /// Dispatch one input line.
    ///
    /// Operation errors come back as `Text` to print; nothing here is
    /// fatal to the session.
    pub fn execute(&mut self, line: &str) -> Response {
        let line = line.trim();
        if line.is_empty() {
            return Response::None;
        }
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "select" => self.select(rest),
            "add" => self.add(rest),
            "list" => self.list(),
            "where" => Response::Text(self.where_str()),
            "home" => {
                self.catalog.reset();
                Response::Text("(home)".to_string())
            },
            "save" => self.save(rest),
            "help" => Response::Text(HELP.to_string()),
            "quit" | "exit" => self.quit(),
            _ => Response::Text(format!("unknown command: {cmd} (try 'help')")),
        }
    }

    fn where_str(&self) -> String {
        let name = self.catalog.category();
        if name.is_empty() {
            "(home)".to_string()
        } else {
            name.to_string()
        }
    }

    fn select(&mut self, key: &str) -> Response {
        if key.is_empty() {
            return Response::Text("usage: select <key>".to_string());
        }
        match self.catalog.select(key) {
            Ok(spoken) if spoken.is_empty() => {
                Response::Text(format!("entered {}", self.where_str()))
            },
            Ok(spoken) => Response::Text(format!("speaks: {spoken}")),
            Err(e) => Response::Text(format!("error: {e}")),
        }
    }

    fn add(&mut self, rest: &str) -> Response {
        let Some((key, text)) = rest.split_once(' ') else {
            return Response::Text("usage: add <key> <text>".to_string());
        };
        match self.catalog.add_item(key, text) {
            Ok(()) if self.catalog.is_home() => Response::Text(format!("category {text} added")),
            Ok(()) => Response::Text(format!("item added to {}", self.where_str())),
            Err(e) => Response::Text(format!("error: {e}")),
        }
    }

    fn list(&self) -> Response {
        let locs = self.catalog.image_locs();
        if locs.is_empty() {
            Response::Text("(empty)".to_string())
        } else {
            Response::Text(locs.join("\n"))
        }
    }

    fn save(&self, path: &str) -> Response {
        let target = if path.is_empty() {
            self.source.clone()
        } else {
            PathBuf::from(path)
        };
        match self.catalog.save(&target) {
            Ok(()) => Response::Text(format!("saved to {}", target.display())),
            Err(e) => Response::Text(format!("error: {e}")),
        }
    }

    fn quit(&self) -> Response {
        if self.auto_save
            && let Err(e) = self.catalog.save(&self.source)
        {
            log::error!("auto-save failed: {e}");
        }
        Response::Quit
    }
}
