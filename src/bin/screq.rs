use screq::args::parse_args;
use screq::progress;
use screq::run_require_processor;

fn format_usage() -> &'static str {
    "screq - static sc_require injector for SproutCore apps\n\n\
Usage: screq <appDirectory> <appName> [options]\n\n\
  <appDirectory>            Path to the app source root; its parent directory\n                            \
must be named apps\n  \
  <appName>                 Application namespace (e.g. DarkHorse)\n\n\
Options:\n  \
  -I, --ignore <glob>       Skip files matching glob, relative to the root\n                            \
(repeatable; also read from .screq/config.toml)\n  \
  --json                    Machine-readable run report instead of progress output\n  \
  -v, --verbose             Per-file definition and usage detail\n  \
  -h, --help                Show this message\n  \
  --version                 Show version\n\n\
The app is scanned twice: a definition pass maps App.Symbol names to the\n\
files defining them, then a usage pass rewrites each file with sc_require\n\
directives for the modules it depends on. Re-running is safe: previously\n\
injected headers and directives are replaced, never duplicated.\n"
}

fn main() {
    let parsed = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if parsed.show_help {
        println!("{}", format_usage());
        return;
    }

    if parsed.show_version {
        println!("screq {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(err) = run_require_processor(&parsed) {
        progress::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
