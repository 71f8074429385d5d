use super::console::Console;
use super::help_table;
use super::resolver::resolve_list_name;
use crate::db::{ListStore, APP_NAME_KEY, REGISTRY_KEY};
use crate::error::Result;
use crate::models::{Command, ParsedLine};
use tracing::{error, info, warn};

/// CLI application: the command dispatcher and its session state.
pub struct App<S, C> {
    store: S,
    console: C,
    interactive: bool,
    /// Process arguments after the program name; the first one is the initial command.
    invocation_args: Vec<String>,
}

impl<S, C> App<S, C>
where
    S: ListStore,
    C: Console,
{
    /// Create a new CLI application
    pub fn new(store: S, console: C, invocation_args: Vec<String>) -> Self {
        Self {
            store,
            console,
            interactive: false,
            invocation_args,
        }
    }

    /// Reads the application name, asking for one on the first run against a store.
    pub async fn app_name(&mut self) -> Result<String> {
        if self.store.exists(APP_NAME_KEY).await? {
            if let Some(name) = self.store.get_value(APP_NAME_KEY).await? {
                return Ok(name);
            }
        }

        self.console.say("This is the first time this is run against this store.");
        let name = self
            .console
            .prompt("Please provide a name for this app")?
            .trim()
            .to_string();
        self.store.set_value(APP_NAME_KEY, &name).await?;
        info!("Application name set to {}", name);
        Ok(name)
    }

    /// Run the CLI application
    ///
    /// Executes the command given on invocation, or reads one after showing help.
    /// Loops for as long as interactive mode is on. Failed commands are reported and,
    /// in interactive mode, control returns to the prompt.
    pub async fn run(&mut self) -> Result<()> {
        let mut pending = self.invocation_args.first().cloned();
        if let Some(line) = &pending {
            self.console.say(&format!("command {} detected in parameters", line));
        }

        loop {
            let line = match pending.take() {
                Some(line) => line,
                None => {
                    self.display_help();
                    self.console.prompt("Please provide command")?
                },
            };

            match self.process_line(&line).await {
                Ok(()) => self
                    .console
                    .say(&format!("Command '{}' complete", line.trim())),
                Err(e) => {
                    error!("Command '{}' failed: {:?}", line, e);
                    self.console.warn(&format!("Error executing command: {}", e));
                    if !self.interactive {
                        return Err(e);
                    }
                },
            }

            if !self.interactive {
                break;
            }
        }

        Ok(())
    }

    /// Parses one raw command line and dispatches it.
    ///
    /// Unknown commands are reported and ignored; only store and input failures
    /// come back as errors.
    pub async fn process_line(&mut self, raw: &str) -> Result<()> {
        info!("Processing command '{}'", raw);

        let (keyword, tokens) = match ParsedLine::parse(raw) {
            ParsedLine::Empty => {
                self.console.warn("command '' not valid");
                return Ok(());
            },
            ParsedLine::EnterInteractive => {
                self.enter_interactive();
                return Ok(());
            },
            ParsedLine::Command { keyword, tokens } => (keyword, tokens),
        };

        let command = match keyword.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected command: {}", e);
                self.console.warn(&e.to_string());
                return Ok(());
            },
        };

        let tokens = if !tokens.is_empty() {
            tokens
        } else if !self.interactive && self.invocation_args.len() > 1 {
            self.invocation_args[1..].to_vec()
        } else {
            Vec::new()
        };
        let mut args = split_values(&tokens);

        let mut list = None;
        if let Some(first) = args.first().filter(|_| command.takes_list()) {
            if self.store.position_of(REGISTRY_KEY, first).await?.is_some() {
                list = Some(args.remove(0));
            }
        }

        self.dispatch(command, list, args).await
    }

    async fn dispatch(
        &mut self,
        command: Command,
        list: Option<String>,
        args: Vec<String>,
    ) -> Result<()> {
        info!("Dispatching {} (list: {:?}, args: {:?})", command, list, args);
        match command {
            Command::Help => {
                self.display_help();
                Ok(())
            },
            Command::Interactive => {
                self.enter_interactive();
                Ok(())
            },
            Command::Quit => {
                self.interactive = false;
                self.console.say("Exiting interactive mode. Goodbye!");
                Ok(())
            },
            Command::Reset => self.reset().await,
            Command::New => self.create_lists(list, args).await,
            Command::Show => self.show_lists().await,
            Command::Add | Command::List | Command::Clear | Command::Remove | Command::Del => {
                let list = match list {
                    Some(list) => list,
                    None => match resolve_list_name(&self.store, &mut self.console).await? {
                        Some(list) => list,
                        None => return Ok(()),
                    },
                };
                match command {
                    Command::Add => self.add_entries(&list, args).await,
                    Command::List => self.list_entries(&list).await,
                    Command::Clear => self.clear_list(&list).await,
                    Command::Remove => self.remove_list(&list).await,
                    _ => self.delete_item(&list, args).await,
                }
            },
        }
    }

    fn display_help(&mut self) {
        self.console.say("\nHere are the commands you can use:");
        self.console.say(&help_table().to_string());
    }

    fn enter_interactive(&mut self) {
        self.interactive = true;
        self.console.say("Entering interactive mode, use quit to leave");
    }

    async fn reset(&mut self) -> Result<()> {
        self.store.flush().await?;
        self.interactive = false;
        info!("Store flushed");
        self.console.say("Store has been flushed. Have a nice day");
        Ok(())
    }

    /// Registers new list names at the head of the registry, skipping names already present.
    async fn create_lists(&mut self, list: Option<String>, args: Vec<String>) -> Result<()> {
        let mut names: Vec<String> = list.into_iter().chain(args).collect();
        if names.is_empty() {
            let answer = self
                .console
                .prompt("Please provide names for the new lists, comma separated")?;
            names = split_values(&[answer]);
        }

        for name in names {
            if self.store.position_of(REGISTRY_KEY, &name).await?.is_some() {
                self.console.warn(&format!("List {} already exists", name));
                continue;
            }
            self.store.prepend_registry_entry(&name).await?;
            info!("Registered list {}", name);
            self.console.say(&format!("Created list {}", name));
        }
        Ok(())
    }

    async fn add_entries(&mut self, list: &str, args: Vec<String>) -> Result<()> {
        let values = if args.is_empty() {
            let answer = self.console.prompt(
                "Please provide values to be added, you can specify multiple comma separated values",
            )?;
            split_values(&[answer])
        } else {
            args
        };

        if values.is_empty() {
            self.console.warn("Nothing to add");
            return Ok(());
        }

        for value in values {
            self.console.say(&format!("Adding {} to {}", value, list));
            self.store.append(list, &value).await?;
        }
        Ok(())
    }

    async fn list_entries(&mut self, list: &str) -> Result<()> {
        let entries = self.store.range(list).await?;
        self.console.say(&format!("{} has {} entries", list, entries.len()));
        for entry in &entries {
            self.console.say(entry);
        }
        Ok(())
    }

    async fn show_lists(&mut self) -> Result<()> {
        let names = self.store.range(REGISTRY_KEY).await?;
        self.console.say(&format!("There are {} lists defined", names.len()));
        for name in &names {
            self.console.say(name);
        }
        Ok(())
    }

    async fn clear_list(&mut self, list: &str) -> Result<()> {
        if self.store.delete_key(list).await? {
            info!("Cleared list {}", list);
            self.console.say(&format!("{} has been cleared", list));
        } else {
            self.console.say(&format!("{} was already empty, nothing removed", list));
        }
        Ok(())
    }

    /// Drops the name from the registry. The list's own entries stay in the store.
    async fn remove_list(&mut self, list: &str) -> Result<()> {
        let removed = self
            .store
            .remove_all_occurrences(REGISTRY_KEY, list)
            .await?;
        if removed > 0 {
            info!("Removed {} from the registry", list);
            self.console.say(&format!("Removed {} from the list registry", list));
        } else {
            self.console.warn(&format!("{} was not in the list registry", list));
        }
        Ok(())
    }

    async fn delete_item(&mut self, list: &str, args: Vec<String>) -> Result<()> {
        let mut args = args.into_iter();
        let item = match args.next() {
            Some(item) => item,
            None => self
                .console
                .prompt("Please provide the item to delete")?
                .trim()
                .to_string(),
        };
        let extra: Vec<String> = args.collect();
        if !extra.is_empty() {
            self.console.warn(&format!("Only deleting {}, ignoring {}", item, extra.join(", ")));
        }
        if item.is_empty() {
            self.console.warn("Nothing to delete");
            return Ok(());
        }

        let removed = self.store.remove_all_occurrences(list, &item).await?;
        if removed == 0 {
            self.console.warn(&format!("{} not found in {}", item, list));
        } else {
            info!("Removed {} occurrences of {} from {}", removed, item, list);
            self.console.say(&format!(
                "Removed {} occurrence(s) of {} from {}",
                removed, item, list
            ));
        }
        Ok(())
    }
}

/// Splits every argument on commas, trimming pieces and dropping empty ones.
fn split_values(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
