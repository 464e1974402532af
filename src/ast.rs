//! Abstract Syntax Tree definitions for SwoftLang.
//!
//! This module defines every node produced by the parser: commands, events,
//! typed argument variables, execute blocks, and the statement/expression
//! variants. Each composite node exclusively owns its children — the tree is
//! never shared and never cyclic.
//!
//! ## JSON contract
//!
//! All nodes serialize with `serde`. Statements and expressions are internally
//! tagged with a `"type"` discriminator whose values match the host bridge's
//! node names (`SendCommand`, `IfStatement`, `BinaryExpression`, ...), and
//! [`DataType`] serializes as its canonical string form (`Integer`,
//! `either<String|Integer>`, ...). Optional fields are omitted entirely rather
//! than serialized as null.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::diagnostics::ParseError;

// ============================================================================
// Data types
// ============================================================================

/// The type of a command argument.
///
/// Either a primitive, or a closed `either<A|B|...>` union of further types
/// (recursive, ordered, non-empty). Identifiers that match no primitive map to
/// `Unknown` without error — the host may define additional types the syntax
/// layer has no knowledge of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    String,
    Integer,
    Double,
    Boolean,
    Player,
    Location,
    Unknown,
    Either(Vec<DataType>),
}

impl DataType {
    /// Map a type name to a primitive. Unrecognized names become `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "String" => DataType::String,
            "Integer" | "int" => DataType::Integer,
            "Double" | "double" => DataType::Double,
            "Boolean" | "bool" => DataType::Boolean,
            "Player" => DataType::Player,
            "Location" => DataType::Location,
            _ => DataType::Unknown,
        }
    }

    /// Subtypes of an `either<...>` union; empty for primitives.
    pub fn subtypes(&self) -> &[DataType] {
        match self {
            DataType::Either(subtypes) => subtypes,
            _ => &[],
        }
    }
}

impl fmt::Display for DataType {
    /// Canonical string form: capitalized primitives, `either<T1|T2|...>` unions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "String"),
            DataType::Integer => write!(f, "Integer"),
            DataType::Double => write!(f, "Double"),
            DataType::Boolean => write!(f, "Boolean"),
            DataType::Player => write!(f, "Player"),
            DataType::Location => write!(f, "Location"),
            DataType::Unknown => write!(f, "Unknown"),
            DataType::Either(subtypes) => {
                write!(f, "either<")?;
                for (i, subtype) in subtypes.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", subtype)?;
                }
                write!(f, ">")
            }
        }
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// A typed argument variable, owned by its declaring [`Command`].
///
/// The default value, when present, is retained as the raw lexeme string —
/// `n: Integer = 5` stores `"5"`, never a coerced number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: DataType,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }
}

/// A `command` declaration.
///
/// An alias list (`command "a","b" { ... }`) produces one `Command` per name,
/// each independently parsed from the same body — aliases are structurally
/// duplicated, not shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub name: String,
    /// Empty string means no permission required.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub permission: String,
    /// Empty string means no description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub arguments: Vec<Variable>,
    #[serde(rename = "executeBlock", skip_serializing_if = "Option::is_none")]
    pub execute_block: Option<ExecuteBlock>,
    /// Raw source text of each brace-delimited block (`arguments`, `execute`),
    /// reconstructed from token positions. Kept for diagnostics and host
    /// back-compat; not part of the JSON contract.
    #[serde(skip)]
    pub raw_blocks: BTreeMap<String, String>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permission: String::new(),
            description: String::new(),
            arguments: Vec::new(),
            execute_block: None,
            raw_blocks: BTreeMap::new(),
        }
    }

    /// Raw text of a named block, if it was present in the source.
    pub fn raw_block(&self, name: &str) -> Option<&str> {
        self.raw_blocks.get(name).map(String::as_str)
    }
}

/// An `event` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    pub priority: i32,
    #[serde(rename = "executeBlock", skip_serializing_if = "Option::is_none")]
    pub execute_block: Option<ExecuteBlock>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            execute_block: None,
        }
    }
}

/// Parse result for a whole source file: best-effort AST plus the diagnostics
/// for every declaration that had to be dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    /// Commands in insertion order, alias fan-out included.
    pub commands: Vec<Command>,
    /// Events in declaration order.
    pub events: Vec<Event>,
    /// One entry per dropped declaration (also logged as they occur).
    pub errors: Vec<ParseError>,
}

// ============================================================================
// Execute blocks
// ============================================================================

/// An ordered statement sequence from an `execute { ... }` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecuteBlock {
    pub statements: Vec<Statement>,
}

impl ExecuteBlock {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl Serialize for ExecuteBlock {
    // Hand-written to carry the same "type" discriminator as the statement
    // nodes it contains.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExecuteBlock", 2)?;
        state.serialize_field("type", "ExecuteBlock")?;
        state.serialize_field("statements", &self.statements)?;
        state.end()
    }
}

/// A single statement inside an execute block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `send <message> [to <target>]`
    #[serde(rename = "SendCommand")]
    Send {
        message: Expression,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<Expression>,
    },

    /// `teleport <entity> to <target>`
    #[serde(rename = "TeleportCommand")]
    Teleport { entity: Expression, target: Expression },

    /// `halt` — stop executing the enclosing block.
    #[serde(rename = "HaltCommand")]
    Halt,

    /// `if <condition> { ... } [else ...]`; `else if` chains are right-nested
    /// `If` statements in the `else_branch`.
    #[serde(rename = "IfStatement")]
    If {
        condition: Expression,
        #[serde(rename = "thenStatement")]
        then_branch: Box<Statement>,
        #[serde(rename = "elseStatement", skip_serializing_if = "Option::is_none")]
        else_branch: Option<Box<Statement>>,
    },

    /// A nested `{ ... }` block.
    #[serde(rename = "BlockStatement")]
    Block { statements: Vec<Statement> },

    /// `set <path> to <value>` — assignment to a variable or dotted property path.
    #[serde(rename = "VariableAssignment")]
    Assign {
        #[serde(rename = "variableName")]
        path: String,
        value: Expression,
    },

    /// `cancel event` — suppress the triggering event.
    #[serde(rename = "CancelEventStatement")]
    CancelEvent,
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression inside a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    StringLiteral {
        value: String,
    },

    /// A variable or dotted property path (`target`, `event.player.name`).
    VariableReference {
        name: String,
    },

    /// The right-hand side of `is a T` / `is not a T`.
    TypeLiteral {
        #[serde(rename = "typeName")]
        type_name: String,
    },

    BinaryExpression {
        left: Box<Expression>,
        operator: BinaryOp,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(left: Expression, operator: BinaryOp, right: Expression) -> Self {
        Expression::BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Binary operators, serialized with their source spelling (`"=="`, `"is not"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    #[serde(rename = "==")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<=")]
    LessEquals,
    #[serde(rename = ">=")]
    GreaterEquals,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "is")]
    IsType,
    #[serde(rename = "is not")]
    IsNotType,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "+")]
    Concatenate,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessEquals => "<=",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::IsType => "is",
            BinaryOp::IsNotType => "is not",
            BinaryOp::Contains => "contains",
            BinaryOp::Concatenate => "+",
        };
        write!(f, "{}", spelling)
    }
}

// ============================================================================
// TESTS
// ============================================================================
