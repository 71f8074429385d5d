//! Picks the target list when a command did not name one.

use super::console::Console;
use crate::db::{ListStore, REGISTRY_KEY};
use crate::error::Result;
use tracing::{debug, info};

/// Resolves the list an operation should act on.
///
/// A single registered list is selected automatically and an empty registry yields
/// `None`. Otherwise the user picks by zero-based index or by name, re-prompting on
/// invalid input until a list or `none` is chosen. A returned name is always present
/// in the registry at the moment it was checked.
pub async fn resolve_list_name<S, C>(store: &S, console: &mut C) -> Result<Option<String>>
where
    S: ListStore,
    C: Console,
{
    let count = store.length(REGISTRY_KEY).await?;
    debug!("Resolving list name among {} registered lists", count);

    match count {
        0 => {
            console.warn("No lists defined, use the new command to create one");
            Ok(None)
        },
        1 => {
            let name = store.index_at(REGISTRY_KEY, 0).await?;
            if let Some(name) = &name {
                console.say(&format!("Only one list defined, using {}", name));
            }
            Ok(name)
        },
        _ => select_list(store, console).await,
    }
}

async fn select_list<S, C>(store: &S, console: &mut C) -> Result<Option<String>>
where
    S: ListStore,
    C: Console,
{
    let names = store.range(REGISTRY_KEY).await?;
    console.say("Multiple lists defined, please pick one:");
    for (i, name) in names.iter().enumerate() {
        console.say(&format!("  {}: {}", i, name));
    }
    let none_index = names.len();
    console.say(&format!("  {}: none", none_index));

    loop {
        let answer = console.prompt("Select a list by number or name")?;
        let answer = answer.trim();

        if answer.eq_ignore_ascii_case("none") {
            info!("List selection aborted");
            return Ok(None);
        }

        if let Ok(index) = answer.parse::<usize>() {
            if index == none_index {
                info!("List selection aborted");
                return Ok(None);
            }
            if index < none_index {
                if let Some(name) = store.index_at(REGISTRY_KEY, index).await? {
                    return Ok(Some(name));
                }
            }
            console.warn(&format!(
                "{} is out of range, pick a number between 0 and {}",
                index, none_index
            ));
            continue;
        }

        // Names typed on a command line are stored lowercased, names passed as
        // process arguments are stored as given.
        if !answer.is_empty() {
            let lowered = answer.to_lowercase();
            for candidate in [answer, lowered.as_str()] {
                if store.position_of(REGISTRY_KEY, candidate).await?.is_some() {
                    return Ok(Some(candidate.to_string()));
                }
            }
        }
        console.warn(&format!("'{}' is not a known list", answer));
    }
}
