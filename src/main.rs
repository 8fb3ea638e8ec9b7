use std::path::Path;

use anyhow::bail;

mod jsify;

const HELP: &str = "\
jsify-shaders

Wraps every .glsl/.frag/.vert file under ./source in a JavaScript
template-literal export, written next to the original as <path>.js.

Usage: jsify-shaders

Options:
  -h, --help  Print this help
";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let rest = args.finish();
    if !rest.is_empty() {
        bail!("unrecognized arguments: {rest:?}");
    }

    let root = Path::new("./source");
    let wrapped = jsify::jsify_tree(root)?;
    log::info!("wrapped {wrapped} shader module(s) under {}", root.display());

    Ok(())
}
