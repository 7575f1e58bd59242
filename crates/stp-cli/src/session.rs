//! Line-oriented interactive session.
//!
//! Operands are generated once per set of dimensions and kept in an
//! [`OperandCache`] per operation, so repeating a command reuses the same
//! matrices until the dimensions change or `refresh` is issued.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use rand::Rng;

use stp_algebra::config::DemoConfig;
use stp_algebra::operands::OperandCache;

use crate::operands::{
    matrix_addition_operands, product_operands, vector_operands, MatrixDims, OperandPair,
    VectorDims,
};
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Product(MatrixDims),
    AddMatrices(MatrixDims),
    AddVectors(VectorDims),
    /// Regenerate operands for the previous command and rerun it.
    Refresh,
    Quit,
}

fn parse_dims<const N: usize>(name: &str, args: &[&str]) -> Result<[usize; N]> {
    if args.len() != N {
        bail!("{} expects {} dimensions, got {}", name, N, args.len());
    }
    let mut dims = [0usize; N];
    for (slot, arg) in dims.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .with_context(|| format!("Invalid dimension for {}: {:?}", name, arg))?;
    }
    Ok(dims)
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match name {
        "product" => {
            let [m, n, p, q] = parse_dims::<4>(name, &args)?;
            SessionCommand::Product((m, n, p, q))
        }
        "add-matrices" => {
            let [m, n, p, q] = parse_dims::<4>(name, &args)?;
            SessionCommand::AddMatrices((m, n, p, q))
        }
        "add-vectors" => {
            let [d1, d2] = parse_dims::<2>(name, &args)?;
            SessionCommand::AddVectors((d1, d2))
        }
        "refresh" => SessionCommand::Refresh,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("Unknown command: {}", other),
    };
    Ok(Some(command))
}

pub struct Session<R> {
    config: DemoConfig,
    rng: R,
    product: OperandCache<MatrixDims, OperandPair>,
    addition: OperandCache<MatrixDims, OperandPair>,
    vectors: OperandCache<VectorDims, OperandPair>,
    last: Option<SessionCommand>,
}

impl<R: Rng> Session<R> {
    pub fn new(config: DemoConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            product: OperandCache::new(),
            addition: OperandCache::new(),
            vectors: OperandCache::new(),
            last: None,
        }
    }

    /// Run one command. `Quit` returns `None`.
    pub fn execute(&mut self, command: SessionCommand) -> Result<Option<Report>> {
        let (command, refresh) = match command {
            SessionCommand::Quit => return Ok(None),
            SessionCommand::Refresh => match self.last {
                Some(last) => (last, true),
                None => bail!("Nothing to refresh yet"),
            },
            other => (other, false),
        };

        let config = &self.config;
        let rng = &mut self.rng;
        let report = match command {
            SessionCommand::Product(dims) => {
                let generate = || product_operands(rng, config, dims);
                let (a, b) = if refresh {
                    self.product.refresh(dims, generate)?
                } else {
                    self.product.get_or_insert_with(dims, generate)?
                };
                Report::product(a.clone(), b.clone())?
            }
            SessionCommand::AddMatrices(dims) => {
                let generate = || matrix_addition_operands(rng, config, dims);
                let (a, b) = if refresh {
                    self.addition.refresh(dims, generate)?
                } else {
                    self.addition.get_or_insert_with(dims, generate)?
                };
                Report::matrix_addition(a.clone(), b.clone())?
            }
            SessionCommand::AddVectors(dims) => {
                let generate = || vector_operands(rng, config, dims);
                let (v1, v2) = if refresh {
                    self.vectors.refresh(dims, generate)?
                } else {
                    self.vectors.get_or_insert_with(dims, generate)?
                };
                Report::vector_addition(v1.clone(), v2.clone())?
            }
            SessionCommand::Refresh | SessionCommand::Quit => unreachable!("handled above"),
        };
        self.last = Some(command);
        Ok(Some(report))
    }

    /// Read commands until `quit` or end of input, writing each report.
    ///
    /// A failing command is reported on `output` and the session continues.
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        input: I,
        output: &mut W,
        json: bool,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            let outcome = parse_command(&line).and_then(|cmd| match cmd {
                Some(cmd) => self.execute(cmd).map(|report| (cmd, report)).map(Some),
                None => Ok(None),
            });
            match outcome {
                Ok(Some((SessionCommand::Quit, _))) => break,
                Ok(Some((_, Some(report)))) => {
                    if json {
                        report.write_json(output)?;
                    } else {
                        report.write_text(output)?;
                        writeln!(output)?;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    log::warn!("Session command {:?} failed: {:#}", line, err);
                    writeln!(output, "error: {:#}", err)?;
                }
            }
        }
        Ok(())
    }
}
