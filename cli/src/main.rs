// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! calgrid - deterministic event layout for calendar views

use calgrid_cli::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    run()
}
