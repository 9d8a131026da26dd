//! Child side of the multiprocess strategy and the message codec shared
//! with the parent.
//!
//! One request per process: the parent writes a JSON request to the
//! child's stdin and closes it; the child answers with one JSON response
//! on stdout and exits.

use std::io::{self, BufReader, BufWriter, Read, Write};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TransferError;
use crate::operation::Operation;

#[derive(Serialize)]
struct RequestRef<'a> {
    operation: Operation,
    values: &'a [i64],
}

/// Decoded request, as seen by the child
#[derive(Debug, Deserialize)]
pub struct Request {
    pub operation: Operation,
    pub values: Vec<i64>,
}

#[derive(Serialize)]
struct ResponseRef<'a> {
    values: &'a [i64],
}

#[derive(Deserialize)]
struct Response {
    values: Vec<i64>,
}

pub fn write_request<W: Write>(
    writer: W,
    operation: Operation,
    values: &[i64],
) -> Result<(), TransferError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, &RequestRef { operation, values })?;
    writer.flush()?;
    Ok(())
}

/// Reads the request to end of input.
pub fn read_request<R: Read>(reader: R) -> Result<Request, TransferError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

pub fn write_response<W: Write>(writer: W, values: &[i64]) -> Result<(), TransferError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, &ResponseRef { values })?;
    writer.flush()?;
    Ok(())
}

pub fn read_response<R: Read>(reader: R) -> Result<Vec<i64>, TransferError> {
    let response: Response = serde_json::from_reader(BufReader::new(reader))?;
    Ok(response.values)
}

/// Serve one request: decode, apply, encode.
pub fn serve<R: Read, W: Write>(input: R, output: W) -> Result<(), TransferError> {
    let request = read_request(input)?;
    debug!(
        "worker {} applying {} to {} values",
        std::process::id(),
        request.operation,
        request.values.len()
    );
    let values = request.operation.apply(&request.values);
    write_response(output, &values)
}

/// Worker process entry point, over stdin and stdout
pub fn run_worker() -> Result<(), TransferError> {
    serve(io::stdin().lock(), io::stdout().lock())
}
