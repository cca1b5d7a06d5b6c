use std::io;

use lithe::repl;

fn main() -> io::Result<()> {
    repl::run()
}
