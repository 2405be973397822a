use crate::descriptor::Descriptor;
use crate::error::{FlakeError, Result};
use crate::hooks::{ShellHook, HOOK_TEMPLATE_NAME};
use log::debug;
use std::error::Error as _;
use tera::{Context, Tera};

pub const FLAKE_TEMPLATE_NAME: &str = "flake.nix";

pub const FLAKE_TEMPLATE: &str = r#"
{
  description = "{{ description }}";

  inputs = {
    nixpkgs.url = "{{ nixpkgs }}";
  };

  outputs = { self, nixpkgs, ... }: let
    system = "{{ system }}"; # Change to your system if needed
    pkgs = import nixpkgs {
      inherit system;
    };
  in {
    devShells.${system}.default = pkgs.mkShell {
      buildInputs = with pkgs; [{% for p in packages %}
        {{ p }}{% endfor %}
      ];

      shellHook = ''{% include "hook" %}'';
    };
  };
}
"#;

/// Renders a [`Descriptor`] into `flake.nix` text.
pub struct FlakeGenerator {
    tera: Tera,
    hook: ShellHook,
}

impl FlakeGenerator {
    /// Compose the flake template with the shell hook it includes.
    pub fn new(hook: ShellHook) -> Result<Self> {
        Self::with_flake_template(hook, FLAKE_TEMPLATE)
    }

    /// Like [`FlakeGenerator::new`] but with a caller-supplied outer template.
    pub fn with_flake_template(hook: ShellHook, flake_template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        // Nix is not HTML; values go out verbatim.
        tera.autoescape_on(Vec::new());

        tera.add_raw_template(HOOK_TEMPLATE_NAME, hook.template())
            .map_err(|e| FlakeError::template_parse(HOOK_TEMPLATE_NAME, describe(&e)))?;
        tera.add_raw_template(FLAKE_TEMPLATE_NAME, flake_template)
            .map_err(|e| FlakeError::template_parse(FLAKE_TEMPLATE_NAME, describe(&e)))?;
        debug!("Composed {} with {} shell hook", FLAKE_TEMPLATE_NAME, hook);

        Ok(Self { tera, hook })
    }

    pub fn for_descriptor(descriptor: &Descriptor) -> Result<Self> {
        Self::new(descriptor.shell_hook())
    }

    pub fn hook(&self) -> ShellHook {
        self.hook
    }

    pub fn render(&self, descriptor: &Descriptor) -> Result<String> {
        let context = Context::from_serialize(descriptor)
            .map_err(|e| FlakeError::template_exec(describe(&e)))?;
        self.tera
            .render(FLAKE_TEMPLATE_NAME, &context)
            .map_err(|e| FlakeError::template_exec(describe(&e)))
    }
}

/// Render `descriptor` with the hook for its language.
pub fn generate(descriptor: &Descriptor) -> Result<String> {
    FlakeGenerator::for_descriptor(descriptor)?.render(descriptor)
}

// tera keeps the useful part of a message in the source chain
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
