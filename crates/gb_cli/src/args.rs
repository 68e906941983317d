pub(crate) struct CliArgs {
    pub cmd: String,
    pub json_out: bool,
    pub no_exit_message: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: goldbyte <run|check|tokens|repl|info> [json] [no-exit-message] <file>"
}

pub(crate) fn parse_args<I>(argv: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut argv = argv.into_iter();
    let cmd = argv.next().ok_or_else(|| usage().to_string())?;

    let mut json_out = false;
    let mut no_exit_message = false;
    let mut positional: Vec<String> = Vec::new();

    for a in argv {
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}\n{}", usage()));
        }
        if a == "json" {
            json_out = true;
        } else if a == "no-exit-message" {
            no_exit_message = true;
        } else {
            positional.push(a);
        }
    }

    Ok(CliArgs {
        cmd,
        json_out,
        no_exit_message,
        positional,
    })
}
