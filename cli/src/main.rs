/*
  Raptor, a UCI-compatible chess engine.
  Copyright (C) 2022 The Raptor Authors (see AUTHORS.md file)

  Raptor is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Raptor is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

use std::{env, io, path::Path, process::ExitCode};

use raptor_base::{perft::perft, Position};
use raptor_uci::Driver;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("perft") => perft_mode(&args[2..]),
        Some("uci") | None => uci_mode(),
        Some(other) => {
            eprintln!("unrecognized mode `{other}`; expected `uci` or `perft <depth> <fen>`");
            ExitCode::FAILURE
        }
    }
}

/// Load the NNUE weight file named by the `RAPTOR_NNUE` environment
/// variable, if set, before handing off to the UCI loop. A missing
/// variable is not an error (the evaluator falls back to an all-zero
/// network); a variable that points at an unreadable or malformed file is
/// fatal, per this engine's error handling design.
fn load_nnue() -> Result<(), ExitCode> {
    let Ok(path) = env::var("RAPTOR_NNUE") else {
        return Ok(());
    };
    match raptor_engine::nnue_file::load(Path::new(&path)) {
        Ok(weights) => {
            raptor_base::nnue::init(weights.transformer);
            raptor_engine::evaluate::init(weights.output);
            Ok(())
        }
        Err(e) => {
            eprintln!("fatal: could not load NNUE weights from `{path}`: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

fn uci_mode() -> ExitCode {
    if let Err(code) = load_nnue() {
        return code;
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    let code = Driver::new().run(stdin.lock(), stdout.lock());
    if code == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn perft_mode(args: &[String]) -> ExitCode {
    if args.len() < 2 {
        eprintln!("usage: raptor perft <depth> <fen>");
        return ExitCode::FAILURE;
    }
    let Ok(depth) = args[0].parse::<u8>() else {
        eprintln!("`{}` is not a valid depth", args[0]);
        return ExitCode::FAILURE;
    };
    let fen = args[1..].join(" ");
    let pos = match Position::from_fen(&fen) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("could not parse FEN `{fen}`: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", perft(&pos, depth));
    ExitCode::SUCCESS
}
