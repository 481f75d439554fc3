// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for evaluator crash safety testing.
//!
//! This target feeds arbitrary byte sequences to the evaluator and asserts
//! that it never panics. Malformed input must come back as a `ParseError`,
//! never as a crash, and deep parenthesis nesting must hit the parser's
//! depth limit instead of the stack.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tally_core::evaluate;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 (the evaluator takes strings)
    if let Ok(source) = std::str::from_utf8(data) {
        // Success = no panic. Errors are expected for most inputs.
        let _ = evaluate(source);
    }
});
