//! # gesture-core: Pure Calculator Logic
//!
//! This crate turns a stream of classified hand-gesture labels ("5",
//! "tambah", "3", "Start", ...) into a small arithmetic calculation.
//! It contains all state-machine logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Gesture Calculator Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Image classifier (external)  →  label string             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        gesture-session: SessionRegistry, config, logging        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gesture-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   label   │  │ operator  │  │ calculator │  │   state   │  │   │
//! │  │   │ classify  │  │  Table    │  │  process   │  │  Phase    │  │   │
//! │  │   │           │  │  Symbol   │  │  evaluate  │  │ CalcResult│  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SESSIONS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The `GestureCalculator` state machine and status messages
//! - [`state`] - Snapshot types (`CalculatorState`, `Phase`, `CalcResult`)
//! - [`number`] - Numeric result type
//! - [`operator`] - Operators and the label → symbol table
//! - [`label`] - Label classification
//! - [`validation`] - Validators for configuration-supplied values
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gesture_core::{CalcResult, GestureCalculator, Number, OperatorTable};
//!
//! let table = OperatorTable::indonesian();
//! let mut calc = GestureCalculator::new();
//!
//! calc.process("5", &table);
//! calc.process("tambah", &table);
//! let snapshot = calc.process("3", &table);
//!
//! assert_eq!(snapshot.result, Some(CalcResult::Numeric(Number::Integer(8))));
//! assert_eq!(calc.status_message(), "Calculation complete! Show 'Start' to reset.");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod label;
pub mod number;
pub mod operator;
pub mod state;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{evaluate, status_message, GestureCalculator};
pub use error::{CoreError, ValidationError};
pub use label::{classify_label, LabelKind};
pub use number::{Number, Operand};
pub use operator::{Operator, OperatorSymbol, OperatorTable};
pub use state::{CalcResult, CalculatorState, Phase};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label that resets the calculator from any phase.
pub const START_LABEL: &str = "Start";

/// Label the classifier emits when it cannot decide. Never changes state.
pub const UNDEFINED_LABEL: &str = "Undefined";

/// Maximum length of an operator table label, in characters.
pub const MAX_LABEL_LEN: usize = 64;
