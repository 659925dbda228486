use anyhow::{Result, anyhow, bail};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tasknest_core::{FileKv, PatternStore, existing_titles, time::parse_local_to_utc};
use tasknest_ingest::load_tasks;
use tracing::debug;

use crate::config::load_config;

#[derive(Subcommand, Debug)]
pub enum PatternsCommand {
    /// Record that a suggested (or created) task was accepted
    Accept {
        title: String,

        /// Local time "YYYY-MM-DD HH:MM" in the configured timezone (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Record that a suggestion was rejected
    Reject {
        title: String,

        #[arg(long)]
        at: Option<String>,
    },

    /// Suggest a task for the current time slot from the current task list
    Suggest {
        /// Current task list (.json or .csv)
        #[arg(long)]
        tasks: PathBuf,

        #[arg(long)]
        at: Option<String>,

        /// Show up to N ranked candidates instead of one
        #[arg(long)]
        top: Option<usize>,
    },

    /// Forget titles that are no longer in the task list
    Prune {
        #[arg(long)]
        tasks: PathBuf,
    },

    /// Forget one title in every time slot
    Forget { title: String },

    /// Delete all learned patterns for the user
    Clear,

    /// Totals over the learned patterns
    Stats {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn run(cmd: PatternsCommand, user: Option<&str>) -> Result<()> {
    let cfg = load_config()?;
    let tz = cfg.timezone()?;
    let data_dir = cfg.data_dir()?;
    let mut store = PatternStore::new(FileKv::new(&data_dir), user, tz);
    debug!(key = store.key(), dir = %data_dir.display(), tz = %tz, "opened pattern store");

    let when = |at: Option<&str>| -> Result<DateTime<Utc>> {
        match at {
            Some(local) => parse_local_to_utc(local, tz).map_err(|e| anyhow!(e)),
            None => Ok(Utc::now()),
        }
    };

    match cmd {
        PatternsCommand::Accept { title, at } => {
            let title = task_title(&title)?;
            let when = when(at.as_deref())?;
            store.record_accepted(title, when);
            println!("Accepted '{}' for slot {}", title, store.bucket_for(when));
        }
        PatternsCommand::Reject { title, at } => {
            let title = task_title(&title)?;
            let when = when(at.as_deref())?;
            store.record_rejected(title, when);
            println!("Rejected '{}' for slot {}", title, store.bucket_for(when));
        }
        PatternsCommand::Suggest { tasks, at, top } => {
            let when = when(at.as_deref())?;
            suggest(&store, &tasks, when, top)?;
        }
        PatternsCommand::Prune { tasks } => {
            let existing = existing_titles(&load_tasks(&tasks)?);
            let removed = store.prune_deleted(&existing);
            println!("Pruned {} stale entries", removed);
        }
        PatternsCommand::Forget { title } => {
            let title = task_title(&title)?;
            let removed = store.remove_title_everywhere(title);
            println!("Removed '{}' from {} slots", title, removed);
        }
        PatternsCommand::Clear => {
            store.clear_all();
            println!("Cleared patterns for {}", store.key());
        }
        PatternsCommand::Stats { json } => {
            let stats = store.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("key:           {}", store.key());
                println!("total weight:  {}", stats.total_weight);
                println!("unique titles: {}", stats.unique_titles);
                println!("time slots:    {}", stats.buckets);
            }
        }
    }

    Ok(())
}

/// Titles are matched against task lists, which are loaded trimmed.
fn task_title(raw: &str) -> Result<&str> {
    let title = raw.trim();
    if title.is_empty() {
        bail!("task title is empty");
    }
    Ok(title)
}

fn suggest(
    store: &PatternStore<FileKv>,
    tasks: &Path,
    when: DateTime<Utc>,
    top: Option<usize>,
) -> Result<()> {
    let existing = existing_titles(&load_tasks(tasks)?);
    let bucket = store.bucket_for(when);

    match top {
        Some(n) => {
            let ranked = store.top_for(when, &existing, n);
            if ranked.is_empty() {
                println!("No suggestion for slot {}", bucket);
            }
            for (i, (title, weight)) in ranked.iter().enumerate() {
                println!("{}. {} (x{})", i + 1, title, weight);
            }
        }
        None => match store.suggest(when, &existing) {
            Some(title) => println!("{}", title),
            None => println!("No suggestion for slot {}", bucket),
        },
    }

    Ok(())
}
