//! Circuit Input CLI.
//!
//! Every command except `version` writes one canonical JSON line to stdout:
//! `{"ok":…}` on success (exit 0) or `{"err":{"code","message","name"}}` on
//! failure (exit 1). Logs go to stderr, filtered by `RUST_LOG`.

use std::collections::BTreeMap;
use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use circuit_input::field::{self, FieldElement};
use circuit_input::{canonicalize, encode_with_limits, DataType, ErrorCode, InputResult, InputValue, Limits};

#[derive(Parser)]
#[command(name = "circuit-input")]
#[command(about = "BN254 field arithmetic and circuit input encoding", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Export field modulus metadata
    ExportMetadata,

    /// Evaluate one field operation; operands are decimal or 0x hex
    Field {
        /// Operation to apply
        #[arg(value_enum)]
        op: FieldOp,
        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second operand, for binary operations
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },

    /// Decompose a field element into bits, bytes or radix digits
    Decompose {
        /// Value to decompose, decimal or 0x hex
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Output digit kind
        #[arg(long, value_enum, default_value_t = Format::Bits)]
        format: Format,
        /// Radix, for `--format radix`
        #[arg(long, default_value_t = 2)]
        radix: u32,
        /// Number of digits to emit
        #[arg(long)]
        len: usize,
        /// Emit most significant digit first
        #[arg(long)]
        be: bool,
    },

    /// Encode a JSON document read from stdin as circuit input
    Encode {
        /// Use lenient nesting and container limits
        #[arg(long)]
        lenient: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Inv,
    Neg,
    Hex,
    Dec,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Bits,
    Bytes,
    Radix,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) | None => {
            println!("Circuit Input v{}", env!("CARGO_PKG_VERSION"));
            println!("Field: {} ({} bits)", field::FIELD_NAME, field::MODULUS_BIT_SIZE);
            return ExitCode::SUCCESS;
        }
        Some(Commands::ExportMetadata) => Ok(export_metadata()),
        Some(Commands::Field { op, a, b }) => run_field(op, &a, b.as_deref()),
        Some(Commands::Decompose {
            value,
            format,
            radix,
            len,
            be,
        }) => run_decompose(&value, format, radix, len, be),
        Some(Commands::Encode { lenient }) => run_encode(lenient),
    };

    emit(result)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(result: InputResult<InputValue>) -> ExitCode {
    let mut out = BTreeMap::new();
    let code = match result {
        Ok(value) => {
            out.insert("ok".to_string(), value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(code = err.code(), "command failed");
            out.insert("err".to_string(), error_value(&err));
            ExitCode::FAILURE
        }
    };
    println!("{}", canonicalize(&InputValue::Object(out)));
    code
}

fn error_value(err: &ErrorCode) -> InputValue {
    let mut fields = BTreeMap::new();
    fields.insert("code".to_string(), InputValue::Number(u64::from(err.code())));
    fields.insert("name".to_string(), InputValue::String(err.name().to_string()));
    fields.insert("message".to_string(), InputValue::String(err.to_string()));
    InputValue::Object(fields)
}

fn export_metadata() -> InputValue {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), InputValue::String(field::FIELD_NAME.to_string()));
    fields.insert(
        "modulus".to_string(),
        InputValue::String(field::MODULUS_DECIMAL.to_string()),
    );
    fields.insert(
        "modulus_hex".to_string(),
        InputValue::String(format!("0x{}", hex::encode(FieldElement::modulus_be_bytes()))),
    );
    fields.insert(
        "bit_size".to_string(),
        InputValue::Number(field::MODULUS_BIT_SIZE as u64),
    );
    fields.insert(
        "byte_size".to_string(),
        InputValue::Number(field::MODULUS_BYTE_SIZE as u64),
    );
    fields.insert("max_radix".to_string(), InputValue::Number(field::MAX_RADIX as u64));
    InputValue::Object(fields)
}

fn run_field(op: FieldOp, a: &str, b: Option<&str>) -> InputResult<InputValue> {
    let a = FieldElement::parse(a)?;
    let rhs = || -> InputResult<FieldElement> {
        let b = b.ok_or_else(|| ErrorCode::E100_InvalidInput("missing second operand".to_string()))?;
        FieldElement::parse(b)
    };
    let result = match op {
        FieldOp::Add => &a + &rhs()?,
        FieldOp::Sub => &a - &rhs()?,
        FieldOp::Mul => &a * &rhs()?,
        FieldOp::Div => a.div(&rhs()?)?,
        FieldOp::Mod => a.modulo(&rhs()?)?,
        FieldOp::Pow => a.pow32(&rhs()?)?,
        FieldOp::Inv => a.inverse()?,
        FieldOp::Neg => -&a,
        FieldOp::Hex => a,
        FieldOp::Dec => return Ok(InputValue::String(a.to_decimal())),
    };
    Ok(InputValue::String(result.to_hex()))
}

fn run_decompose(
    value: &str,
    format: Format,
    radix: u32,
    len: usize,
    be: bool,
) -> InputResult<InputValue> {
    let element = FieldElement::parse(value)?;
    let digits = match (format, be) {
        (Format::Bits, false) => element.to_le_bits(len)?,
        (Format::Bits, true) => element.to_be_bits(len)?,
        (Format::Bytes, false) => element.to_le_bytes(len)?,
        (Format::Bytes, true) => element.to_be_bytes(len)?,
        (Format::Radix, false) => element.to_le_radix(radix, len)?,
        (Format::Radix, true) => element.to_be_radix(radix, len)?,
    };
    Ok(InputValue::Array(
        digits.into_iter().map(|d| InputValue::Number(u64::from(d))).collect(),
    ))
}

fn run_encode(lenient: bool) -> InputResult<InputValue> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| ErrorCode::E100_InvalidInput(format!("failed to read stdin: {e}")))?;
    let document: serde_json::Value = serde_json::from_str(&input)
        .map_err(|e| ErrorCode::E100_InvalidInput(format!("invalid JSON: {e}")))?;

    let limits = if lenient {
        Limits::lenient()
    } else {
        Limits::strict()
    };
    let data = DataType::try_from(&document)?;
    encode_with_limits(&data, &limits)
}
