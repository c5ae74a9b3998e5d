//! Domain value objects: Framework, Database, MessageQueue, project names.
//!
//! # Design
//!
//! The three enumerated initializer settings are pure value types: `Copy`,
//! equality-by-value, no identity. Each one implements [`Choice`], which
//! exposes the ordered allowed list, the label used in prompts and
//! diagnostics, and the exact string the template engine expects.
//!
//! Parsing is exact and case-sensitive: the template engine rejects
//! `mysql` just as it rejects `Oracle`, so the domain does too.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add it to `ALL` and to the `as_str` match
//! 3. Prompts and validation pick it up from there

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Choice ───────────────────────────────────────────────────────────────────

/// An enumerated setting with a fixed, ordered set of allowed values.
pub trait Choice: Copy + PartialEq + fmt::Display + 'static {
    /// Label shown in menus and used in `Invalid {label}: …` diagnostics.
    const LABEL: &'static str;

    /// Every allowed value, in menu order.
    const ALL: &'static [Self];

    /// The exact token passed to the template engine.
    fn as_str(&self) -> &'static str;

    /// The allowed tokens, in menu order.
    fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(Choice::as_str).collect()
    }

    /// Exact-match lookup of a user-supplied token.
    fn parse_choice(value: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str() == value)
            .ok_or_else(|| DomainError::InvalidChoice {
                setting: Self::LABEL,
                value: value.to_owned(),
                allowed: Self::allowed(),
            })
    }
}

macro_rules! impl_display_from_str {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(Choice::as_str(self))
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::parse_choice(s)
            }
        }
    };
}

// ── Framework ────────────────────────────────────────────────────────────────

/// Target .NET framework of the generated solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "net8.0")]
    Net8,
    #[serde(rename = "net9.0")]
    Net9,
    #[default]
    #[serde(rename = "net10.0")]
    Net10,
}

impl Choice for Framework {
    const LABEL: &'static str = "Framework";
    const ALL: &'static [Self] = &[Self::Net8, Self::Net9, Self::Net10];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Net8 => "net8.0",
            Self::Net9 => "net9.0",
            Self::Net10 => "net10.0",
        }
    }
}

impl_display_from_str!(Framework);

// ── Database ─────────────────────────────────────────────────────────────────

/// Database provider wired into the generated solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Database {
    #[default]
    MySql,
    SqlServer,
    PostgreSQL,
    Sqlite,
    GaussDB,
    #[serde(rename = "DMDB")]
    Dmdb,
    MongoDB,
}

impl Choice for Database {
    const LABEL: &'static str = "Database";
    const ALL: &'static [Self] = &[
        Self::MySql,
        Self::SqlServer,
        Self::PostgreSQL,
        Self::Sqlite,
        Self::GaussDB,
        Self::Dmdb,
        Self::MongoDB,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::MySql => "MySql",
            Self::SqlServer => "SqlServer",
            Self::PostgreSQL => "PostgreSQL",
            Self::Sqlite => "Sqlite",
            Self::GaussDB => "GaussDB",
            Self::Dmdb => "DMDB",
            Self::MongoDB => "MongoDB",
        }
    }
}

impl_display_from_str!(Database);

// ── MessageQueue ─────────────────────────────────────────────────────────────

/// Message queue provider wired into the generated solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageQueue {
    #[default]
    RabbitMQ,
    Kafka,
    AzureServiceBus,
    AmazonSQS,
    #[serde(rename = "NATS")]
    Nats,
    RedisStreams,
    Pulsar,
}

impl Choice for MessageQueue {
    const LABEL: &'static str = "MessageQueue";
    const ALL: &'static [Self] = &[
        Self::RabbitMQ,
        Self::Kafka,
        Self::AzureServiceBus,
        Self::AmazonSQS,
        Self::Nats,
        Self::RedisStreams,
        Self::Pulsar,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::RabbitMQ => "RabbitMQ",
            Self::Kafka => "Kafka",
            Self::AzureServiceBus => "AzureServiceBus",
            Self::AmazonSQS => "AmazonSQS",
            Self::Nats => "NATS",
            Self::RedisStreams => "RedisStreams",
            Self::Pulsar => "Pulsar",
        }
    }
}

impl_display_from_str!(MessageQueue);

// ── Booleans ─────────────────────────────────────────────────────────────────

/// Parse a boolean command-line value.
///
/// Accepts `true/t/1/yes/y` and `false/f/0/no/n`, case-insensitively and
/// ignoring surrounding whitespace.
pub fn parse_bool_arg(value: &str) -> Result<bool, DomainError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err(DomainError::InvalidBoolean {
            value: value.to_owned(),
        }),
    }
}

// ── Project names ────────────────────────────────────────────────────────────

/// Normalize a raw project name into dotted PascalCase.
///
/// Hyphens act as dots. Each dot-delimited segment is split on underscores
/// and whitespace into words, each word is capitalized, and the words are
/// concatenated. Segments that yield no words are dropped; input made only
/// of separators is returned untouched.
///
/// ```
/// use cleanddd_core::domain::normalize_project_name;
///
/// assert_eq!(normalize_project_name("my-cool_app.core"), "My.CoolApp.Core");
/// assert_eq!(normalize_project_name("a..b"), "A.B");
/// assert_eq!(normalize_project_name(""), "");
/// ```
pub fn normalize_project_name(raw: &str) -> String {
    let segments: Vec<String> = raw
        .replace('-', ".")
        .split('.')
        .map(|segment| {
            segment
                .split(|c: char| c == '_' || c.is_whitespace())
                .filter(|word| !word.is_empty())
                .map(capitalize)
                .collect::<String>()
        })
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return raw.to_owned();
    }
    segments.join(".")
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
