/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use embedding_matcher::{DEFAULT_ACCEPTANCE_THRESHOLD, EMBEDDING_DIMENSION};

#[derive(Debug, Parser)]
#[command(version, about = "Attendance index and identity matching engine")]
pub struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a metric index from "<key> <id>" lines read on stdin.
    #[command(name = "create_avl")]
    CreateAvl(CreateAvlArgs),
    /// Move one entity to a new key, inserting it if unknown.
    #[command(name = "update_avl")]
    UpdateAvl(UpdateAvlArgs),
    /// Print the IDs whose key is above or below a threshold.
    #[command(name = "threshold")]
    Threshold(ThresholdArgs),
    /// Build the name trie from the roster.
    #[command(name = "create_trie")]
    CreateTrie(CreateTrieArgs),
    /// Register one name in the name trie.
    #[command(name = "insert_trie")]
    InsertTrie(InsertTrieArgs),
    /// Print the IDs of every name starting with a prefix.
    #[command(name = "search_trie")]
    SearchTrie(SearchTrieArgs),
    /// Identify a face embedding against the roster.
    #[command(name = "distance")]
    Distance(DistanceArgs),
}

#[derive(Debug, Args)]
pub struct CreateAvlArgs {
    /// Snapshot file to write.
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct UpdateAvlArgs {
    /// Snapshot file to update.
    pub path: PathBuf,
    /// The entity's new key.
    pub new_key: u32,
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub id: u32,
    /// The entity's current key, if known. Skips locating it in the index.
    #[arg(long = "from")]
    pub old_key: Option<u32>,
}

#[derive(Debug, Args)]
pub struct ThresholdArgs {
    /// Snapshot file to query.
    pub path: PathBuf,
    pub threshold: u32,
    /// `above` (key >= threshold) or `below` (key <= threshold).
    #[arg(value_enum, allow_hyphen_values = true)]
    pub direction: DirectionArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    #[value(alias = "1")]
    Above,
    #[value(alias = "-1")]
    Below,
}

impl From<DirectionArg> for metric_index::Direction {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Above => Self::AtLeast,
            DirectionArg::Below => Self::AtMost,
        }
    }
}

#[derive(Debug, Args)]
pub struct RosterArg {
    /// Roster CSV with `student_id,name,rn,facial_vector` columns.
    #[arg(long, env = "ROLLCALL_ROSTER", default_value = "../data/students.csv")]
    pub roster: PathBuf,
}

#[derive(Debug, Args)]
pub struct TrieArg {
    /// Name trie snapshot file.
    #[arg(long, env = "ROLLCALL_TRIE", default_value = "../serialized/name.dat")]
    pub trie: PathBuf,
}

#[derive(Debug, Args)]
pub struct CreateTrieArgs {
    #[command(flatten)]
    pub roster: RosterArg,
    #[command(flatten)]
    pub trie: TrieArg,
}

#[derive(Debug, Args)]
pub struct InsertTrieArgs {
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub id: u32,
    #[command(flatten)]
    pub trie: TrieArg,
}

#[derive(Debug, Args)]
pub struct SearchTrieArgs {
    /// Name prefix. An empty prefix matches every name.
    pub query: String,
    #[command(flatten)]
    pub trie: TrieArg,
}

#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// The query embedding's components.
    #[arg(num_args = EMBEDDING_DIMENSION, required = true, allow_negative_numbers = true)]
    pub vector: Vec<f64>,
    #[command(flatten)]
    pub roster: RosterArg,
    /// Maximum distance accepted as a match.
    #[arg(long, env = "ROLLCALL_MATCH_THRESHOLD", default_value_t = DEFAULT_ACCEPTANCE_THRESHOLD)]
    pub threshold: f64,
}

/// Names under which the binary dispatches straight to a subcommand.
const MULTICALL_NAMES: [&str; 7] = [
    "create_avl",
    "update_avl",
    "threshold",
    "create_trie",
    "insert_trie",
    "search_trie",
    "distance",
];

/// Rewrite `argv` so that `create_avl <path>`, invoked through a link named
/// after a subcommand, parses as `rollcall create_avl <path>`.
pub fn multicall_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    let subcommand = args
        .first()
        .and_then(|argv0| Path::new(argv0).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| MULTICALL_NAMES.contains(stem))
        .map(OsString::from);

    if let Some(subcommand) = subcommand {
        args.insert(1, subcommand);
        args[0] = OsString::from("rollcall");
    }
    args
}
