use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to parse filter regex, error: {}", .0)]
    FilterSyntax(regex::Error),

    #[error("Unable to parse value format, error: {}", .0)]
    ValueFormatSyntax(minijinja::Error),

    #[error("Unable to parse label format, error: {}", .0)]
    LabelFormatSyntax(minijinja::Error),

    #[error("Error rendering menu entry for line `{}`: {}", .line, .original)]
    Render {
        line: String,
        original: minijinja::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No prompts were found in the prompt definition YAML. Is `{}` empty?", .path)]
    EmptyPromptDefinition { path: String },

    #[error("Found a non-unique prompt key: `{}`", .0)]
    NonUniquePromptKey(String),

    #[error("Invalid key: key may not be empty")]
    EmptyKey,

    #[error("Invalid key `{}`: key may not contain spaces", .0)]
    KeyWithSpace(String),

    #[error("No prompt with key `{}` is defined", .0)]
    PromptNotFound(String),

    #[error("A prompt key is required when reading prompts from `{}`", .0)]
    MissingPromptConfiguration(String),

    #[error("Error parsing output format: {}", .0)]
    OutputFormatParse(#[from] leon::ParseError),

    #[error("Error rendering output format: {}", .0)]
    OutputFormatRender(#[from] leon::RenderError),

    #[error("Unknown key `{}` in output format, expected one of: value, label, index", .0)]
    UnknownOutputKey(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn render_error(line: &str, original: minijinja::Error) -> Self {
        Self::Render {
            line: line.to_string(),
            original,
        }
    }

    pub fn empty_prompt_definition(path: String) -> Self {
        Self::EmptyPromptDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error was raised while compiling the filter or one of the formats,
    /// before any line was looked at.
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            Self::FilterSyntax(_) | Self::ValueFormatSyntax(_) | Self::LabelFormatSyntax(_)
        )
    }
}
