// src/cli.rs
use std::{env, error::Error, io::Write, path::PathBuf};

use crate::config::options::{ExportFormat, ViewProfile};
use crate::config::state::AppState;
use crate::data::StudentIndex;
use crate::session::Session;
use crate::{fetch, file, html, text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Export(ExportFormat),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CliArgs {
    pub url: Option<String>,
    pub subject: Option<String>,
    pub search: Option<String>,
    pub profile: Option<ViewProfile>,
    pub format: OutputFormat,
    pub include_headers: bool,
    pub out: Option<PathBuf>,
    pub list_subjects: bool,
    pub list_students: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            url: None,
            subject: None,
            search: None,
            profile: None,
            format: OutputFormat::Text,
            include_headers: false,
            out: None,
            list_subjects: false,
            list_students: false,
            help: false,
        }
    }
}

impl CliArgs {
    /// Fold the flags into a fresh AppState.
    pub fn to_state(&self) -> AppState {
        let mut state = AppState::default();
        if let Some(url) = &self.url { state.options.source_url = url.clone(); }
        if let Some(p) = self.profile { state.options.profile = p; }
        if let Some(s) = &self.subject { state.selection.subject = s.clone(); }
        if let Some(q) = &self.search { state.selection.query = q.clone(); }
        if let OutputFormat::Export(fmt) = self.format { state.options.export.format = fmt; }
        state.options.export.include_headers = self.include_headers;
        if let Some(out) = &self.out {
            state.options.export.set_path(&out.to_string_lossy());
        }
        state
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let state = args.to_state();
    if args.search.is_some() && !state.options.profile.search_enabled() {
        eprintln!("Note: --search is ignored by the {} profile", state.options.profile.label());
    }

    let mut session = Session::new(state);
    let url = session.state.options.source_url.clone();
    let fetched = session.apply_fetch(fetch::fetch_dataset(&url));
    if let Err(e) = &fetched {
        eprintln!("{}", e.user_message());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list_subjects {
        for s in session.dataset().subjects() {
            writeln!(out, "{s}")?;
        }
    } else if args.list_students {
        // Listing works for either profile
        for name in StudentIndex::build(session.dataset()).names() {
            writeln!(out, "{name}")?;
        }
    } else {
        emit(&args, &session, &mut out)?;
    }

    fetched.map_err(Into::into)
}

/// Write the current view to `out`, or to the `-o` path.
pub fn emit<W: Write>(args: &CliArgs, session: &Session, out: &mut W) -> Result<(), Box<dyn Error>> {
    let view = session.view();
    let export = &session.state.options.export;

    match (&args.out, args.format) {
        (Some(_), OutputFormat::Export(_)) => {
            let path = file::write_export(export, view, session.subject())?;
            logf!("Export: OK {}", path.display());
            eprintln!("Wrote {}", path.display());
        }
        (Some(path), OutputFormat::Text) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() { file::ensure_directory(parent)?; }
            }
            std::fs::write(path, text::render_text(view))?;
            eprintln!("Wrote {}", path.display());
        }
        (None, OutputFormat::Text) => write!(out, "{}", text::render_text(view))?,
        (None, OutputFormat::Export(ExportFormat::Html)) => {
            writeln!(out, "{}", html::render_table(view).into_string())?
        }
        (None, OutputFormat::Export(_)) => {
            // Delimited output has no row for the message; refuse like write_export
            if let Some(msg) = view.placeholder_message() {
                eprintln!("{msg}");
                return Err("Nothing to export".into());
            }
            write!(out, "{}", file::to_export_string(export, view, session.subject()))?
        }
    }
    Ok(())
}

pub fn parse_args<I>(argv: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = CliArgs::default();
    let mut args = argv.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.url = Some(args.next().ok_or("Missing value for --url")?),
            "-s" | "--subject" => {
                params.subject = Some(args.next().ok_or("Missing value for --subject")?)
            }
            "-q" | "--search" => {
                params.search = Some(args.next().ok_or("Missing value for --search")?)
            }
            "--profile" => {
                let v = args.next().ok_or("Missing value for --profile")?;
                params.profile = Some(
                    ViewProfile::parse(&v).ok_or_else(|| format!("Unknown profile: {}", v))?,
                );
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = if v.eq_ignore_ascii_case("text") {
                    OutputFormat::Text
                } else {
                    OutputFormat::Export(
                        ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?,
                    )
                };
            }
            "--include-headers" => params.include_headers = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?))
            }
            "--list-subjects" => params.list_subjects = true,
            "--list-students" => params.list_students = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.list_subjects && params.list_students {
        return Err("Use either --list-subjects or --list-students, not both".into());
    }
    Ok(params)
}
