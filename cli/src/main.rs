use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cms_fields_core::{
    Builder, Field, FieldArgs, ListItems, OutputFormat, PageArgs, PageExtension, PostFormat,
    PostTypeArgs, Widget, format_value, titleize,
};
use cms_fields_settings::{GeneratorConfig, Revision, load_field, load_fields};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Yaml,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Json => Self::Json,
        }
    }
}

/// Specialized field builder selected by `field --kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FieldKind {
    Field,
    Required,
    Title,
    Image,
    Text,
    Markdown,
    Body,
    Date,
    Boolean,
    Url,
    Number,
    Int,
    Float,
    Percentage,
    File,
    Tags,
    Select,
    Relation,
}

impl FieldKind {
    /// Kinds whose builder always sets its own widget.
    fn forces_widget(self) -> bool {
        matches!(self, Self::Image | Self::Text | Self::File | Self::Tags)
    }
}

#[derive(Debug, Parser)]
#[command(name = "cms-fields")]
#[command(about = "Generate CMS field, page and collection configuration")]
struct Cli {
    /// Generator config YAML (revision and default overrides).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Use the legacy revision regardless of the config file.
    #[arg(long, global = true)]
    legacy: bool,
    /// Output format.
    #[arg(long, global = true, default_value = "yaml")]
    format: CliOutputFormat,
    /// Write the result to a file instead of stdout.
    #[arg(long, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the human-readable label of each name.
    Titleize(TitleizeArgs),
    /// Build a select option.
    Option(OptionArgs),
    /// Build a field.
    Field(FieldCommandArgs),
    /// Build a list field.
    List(ListArgs),
    /// Build a singleton page from a field file.
    Page(PageCommandArgs),
    /// Build a folder collection from a field file.
    PostType(PostTypeCommandArgs),
    /// Print the effective builder defaults.
    Defaults,
}

#[derive(Debug, Args)]
struct TitleizeArgs {
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Debug, Args)]
struct OptionArgs {
    value: String,
    #[arg(long)]
    label: Option<String>,
}

/// Options shared by the field-producing commands.
#[derive(Debug, Args)]
struct CommonFieldArgs {
    /// Display label (defaults to the title-cased name).
    #[arg(long)]
    label: Option<String>,
    /// Override the required flag.
    #[arg(long)]
    required: Option<bool>,
    /// Override the collapsed flag.
    #[arg(long)]
    collapsed: Option<bool>,
    /// Default value, parsed as JSON when possible.
    #[arg(long = "default")]
    default_value: Option<String>,
    /// Editor hint.
    #[arg(long)]
    hint: Option<String>,
    /// Extra widget option as KEY=VALUE (VALUE parsed as JSON when possible).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
}

#[derive(Debug, Args)]
struct FieldCommandArgs {
    /// Field name (some kinds provide a default).
    name: Option<String>,
    #[arg(long, value_enum, default_value = "field")]
    kind: FieldKind,
    /// Widget override (rejected for kinds with a fixed widget).
    #[arg(long, value_parser = parse_tag::<Widget>)]
    widget: Option<Widget>,
    /// Select option as VALUE or VALUE:LABEL.
    #[arg(long = "option")]
    options: Vec<String>,
    /// Related collection of a relation.
    #[arg(long)]
    collection: Option<String>,
    /// Stored field of a relation.
    #[arg(long)]
    value_field: Option<String>,
    /// Comma-separated searchable fields of a relation.
    #[arg(long)]
    search_fields: Option<String>,
    #[command(flatten)]
    common: CommonFieldArgs,
}

#[derive(Debug, Args)]
struct ListArgs {
    name: String,
    /// File holding the sub-field sequence.
    #[arg(long, conflicts_with = "item")]
    fields: Option<PathBuf>,
    /// File holding the single item field.
    #[arg(long)]
    item: Option<PathBuf>,
    #[arg(long)]
    label_singular: Option<String>,
    #[command(flatten)]
    common: CommonFieldArgs,
}

#[derive(Debug, Args)]
struct PageCommandArgs {
    name: String,
    /// File holding the page's field sequence.
    #[arg(long)]
    fields: PathBuf,
    #[arg(long)]
    label: Option<String>,
    #[arg(long)]
    filename: Option<String>,
    #[arg(long)]
    path: Option<String>,
    #[arg(long)]
    folder: Option<String>,
    #[arg(long, value_parser = parse_tag::<PageExtension>)]
    extension: Option<PageExtension>,
    /// Store the page in the data folder.
    #[arg(long)]
    settings: bool,
}

#[derive(Debug, Args)]
struct PostTypeCommandArgs {
    name: String,
    /// File holding the collection's field sequence.
    #[arg(long)]
    fields: PathBuf,
    #[arg(long)]
    label: Option<String>,
    #[arg(long)]
    label_singular: Option<String>,
    #[arg(long)]
    path: Option<String>,
    #[arg(long)]
    subfolder: Option<String>,
    #[arg(long)]
    slug: Option<String>,
    /// Entry format (frontmatter, yaml-frontmatter, json...).
    #[arg(long, value_parser = parse_tag::<PostFormat>)]
    post_format: Option<PostFormat>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_ref(), cli.legacy)?;
    let builder = config.builder();
    let format: OutputFormat = cli.format.into();

    let raw = match cli.command {
        Command::Titleize(args) => {
            let labels: Vec<String> = args.names.iter().map(|n| titleize(n)).collect();
            let mut out = labels.join("\n");
            out.push('\n');
            out
        }
        Command::Option(args) => render(&builder.option(&args.value, args.label.as_deref()), format)?,
        Command::Field(args) => render(&run_field(&builder, args)?, format)?,
        Command::List(args) => render(&run_list(&builder, args)?, format)?,
        Command::Page(args) => render(&run_page(&builder, args)?, format)?,
        Command::PostType(args) => render(&run_post_type(&builder, args)?, format)?,
        Command::Defaults => render(builder.defaults(), format)?,
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, raw)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            eprintln!("Wrote '{}'.", path.display());
        }
        None => print!("{raw}"),
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>, legacy: bool) -> Result<GeneratorConfig, String> {
    let mut config = match path {
        Some(path) => GeneratorConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if legacy {
        config.revision = Revision::Legacy;
    }
    debug!(revision = ?config.revision, "resolved generator config");
    Ok(config)
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, String> {
    format_value(value, format).map_err(|err| err.to_string())
}

fn run_field(builder: &Builder, args: FieldCommandArgs) -> Result<Field, String> {
    let mut field_args = common_field_args(args.common)?;
    if args.widget.is_some() && args.kind.forces_widget() {
        return Err(format!("--widget cannot be combined with --kind {:?}", args.kind));
    }
    field_args.widget = args.widget;
    let name = args.name.as_deref();
    let named = || name.ok_or_else(|| format!("--kind {:?} needs a field name", args.kind));

    let field = match args.kind {
        FieldKind::Field => builder.field(named()?, field_args),
        FieldKind::Required => builder.required(named()?, field_args),
        FieldKind::Title => builder.title(name, field_args),
        FieldKind::Image => builder.image(name, field_args),
        FieldKind::Text => builder.text(name, field_args),
        FieldKind::Markdown => builder.markdown(name, field_args),
        FieldKind::Body => builder.body(field_args),
        FieldKind::Date => builder.date(name, field_args),
        FieldKind::Boolean => builder.boolean(named()?, field_args),
        FieldKind::Url => builder.url(name, field_args),
        FieldKind::Number => builder.number(named()?, field_args),
        FieldKind::Int => builder.int(named()?, field_args),
        FieldKind::Float => builder.float(named()?, field_args),
        FieldKind::Percentage => builder.percentage(name, field_args),
        FieldKind::File => builder.file(named()?, field_args),
        FieldKind::Tags => builder.tags(named()?, field_args),
        FieldKind::Select => {
            if args.options.is_empty() {
                return Err("--kind select needs at least one --option".to_string());
            }
            let options = args
                .options
                .iter()
                .map(|raw| match raw.split_once(':') {
                    Some((value, label)) => builder.option(value, Some(label)),
                    None => builder.option(raw, None),
                })
                .collect();
            builder.select(named()?, options, field_args)
        }
        FieldKind::Relation => {
            let (Some(collection), Some(value_field)) = (&args.collection, &args.value_field)
            else {
                return Err("--kind relation needs --collection and --value-field".to_string());
            };
            let search = parse_csv_list(args.search_fields.as_deref());
            let search: Vec<&str> = if search.is_empty() {
                vec![value_field.as_str()]
            } else {
                search
            };
            builder.relation(named()?, collection, value_field, &search, field_args)
        }
    };
    Ok(field)
}

fn run_list(builder: &Builder, args: ListArgs) -> Result<Field, String> {
    let mut field_args = common_field_args(args.common)?;
    field_args.label_singular = args.label_singular;

    let items = match (args.fields, args.item) {
        (Some(path), _) => Some(ListItems::Fields(
            load_fields(builder, &path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))?,
        )),
        (None, Some(path)) => Some(ListItems::from(
            load_field(builder, &path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))?,
        )),
        (None, None) => None,
    };
    Ok(builder.list(&args.name, items, field_args))
}

fn run_page(builder: &Builder, args: PageCommandArgs) -> Result<cms_fields_core::Page, String> {
    let fields = load_fields(builder, &args.fields)
        .map_err(|err| format!("Failed to load '{}': {err}", args.fields.display()))?;
    let page_args = PageArgs {
        label: args.label,
        filename: args.filename,
        path: args.path,
        folder: args.folder,
        extension: args.extension,
        ..PageArgs::default()
    };
    Ok(if args.settings {
        builder.settings_page(&args.name, fields, page_args)
    } else {
        builder.page(&args.name, fields, page_args)
    })
}

fn run_post_type(
    builder: &Builder,
    args: PostTypeCommandArgs,
) -> Result<cms_fields_core::PostType, String> {
    let fields = load_fields(builder, &args.fields)
        .map_err(|err| format!("Failed to load '{}': {err}", args.fields.display()))?;
    let post_args = PostTypeArgs {
        label: args.label,
        format: args.post_format,
        path: args.path,
        subfolder: args.subfolder,
        slug: args.slug,
        label_singular: args.label_singular,
        ..PostTypeArgs::default()
    };
    Ok(builder.post_type(&args.name, fields, post_args))
}

fn common_field_args(common: CommonFieldArgs) -> Result<FieldArgs, String> {
    let mut args = FieldArgs {
        label: common.label,
        required: common.required,
        collapsed: common.collapsed,
        default_value: common.default_value.as_deref().map(parse_value),
        ..FieldArgs::default()
    };
    if let Some(hint) = common.hint {
        args = args.hint(&hint);
    }
    for pair in &common.set {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("--set expects KEY=VALUE, got '{pair}'"))?;
        if key.is_empty() {
            return Err(format!("--set expects a non-empty key, got '{pair}'"));
        }
        args = args.set(key, parse_value(value));
    }
    Ok(args)
}

/// Parses JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parses a serde enum from its configuration-file tag.
fn parse_tag<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| format!("unknown value '{raw}'"))
}

fn parse_csv_list(raw: Option<&str>) -> Vec<&str> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_json_or_string() {
        assert_eq!(parse_value("3"), Value::from(3));
        assert_eq!(parse_value("false"), Value::Bool(false));
        assert_eq!(parse_value("[\"a\"]"), serde_json::json!(["a"]));
        assert_eq!(parse_value("hello world"), Value::String("hello world".into()));
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag::<Widget>("datetime"), Ok(Widget::Datetime));
        assert_eq!(
            parse_tag::<PostFormat>("toml-frontmatter"),
            Ok(PostFormat::TomlFrontmatter)
        );
        assert!(parse_tag::<PageExtension>("docx").is_err());
    }

    #[test]
    fn test_parse_csv_list() {
        assert_eq!(parse_csv_list(Some("title, slug,,")), vec!["title", "slug"]);
        assert!(parse_csv_list(None).is_empty());
    }

    #[test]
    fn test_common_field_args_rejects_bad_set() {
        let common = CommonFieldArgs {
            label: None,
            required: None,
            collapsed: None,
            default_value: None,
            hint: None,
            set: vec!["nokey".to_string()],
        };
        assert!(common_field_args(common).is_err());
    }

    fn field_command(kind: FieldKind, widget: Option<Widget>) -> FieldCommandArgs {
        FieldCommandArgs {
            name: Some("summary".to_string()),
            kind,
            widget,
            options: Vec::new(),
            collection: None,
            value_field: None,
            search_fields: None,
            common: CommonFieldArgs {
                label: None,
                required: None,
                collapsed: None,
                default_value: None,
                hint: None,
                set: Vec::new(),
            },
        }
    }

    #[test]
    fn test_widget_override_applies_to_open_kinds() {
        let builder = Builder::default();
        let markdown = run_field(&builder, field_command(FieldKind::Markdown, Some(Widget::Code)))
            .unwrap();
        assert_eq!(markdown.widget, Widget::Code);
        let number = run_field(&builder, field_command(FieldKind::Int, Some(Widget::Hidden)))
            .unwrap();
        assert_eq!(number.widget, Widget::Hidden);
        let plain = run_field(&builder, field_command(FieldKind::Date, None)).unwrap();
        assert_eq!(plain.widget, Widget::Datetime);
    }

    #[test]
    fn test_widget_override_rejected_for_fixed_kinds() {
        let builder = Builder::default();
        for kind in [FieldKind::Image, FieldKind::Text, FieldKind::File, FieldKind::Tags] {
            let err = run_field(&builder, field_command(kind, Some(Widget::String))).unwrap_err();
            assert!(err.contains("--widget"), "{kind:?}: {err}");
        }
    }

    #[test]
    fn test_default_via_set_is_kept() {
        let mut command = field_command(FieldKind::Field, None);
        command.common.set = vec!["default=5".to_string()];
        let field = run_field(&Builder::default(), command).unwrap();
        assert_eq!(field.default_value, Some(Value::from(5)));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
