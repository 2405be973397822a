/// Name the flake template uses to pull in the hook.
pub const HOOK_TEMPLATE_NAME: &str = "hook";

const PYTHON_SHELL_HOOK: &str = r#"
        echo "🐍 Welcome to the {{ name }} dev shell!"

        # Optional: Automatically create venv in ./venv
        if [ ! -d venv ]; then
          echo "🔧 Creating virtual environment in ./venv"
          python3 -m venv venv
        fi
        source ./venv/bin/activate
        echo "✅ Virtualenv activated"
"#;

const GO_SHELL_HOOK: &str = r#"
        echo "🐹 Welcome to the {{ name }} dev shell!"

        if [ ! -e go.mod ]; then
          echo "🔧 Creating go mod file"
          go mod init {{ name }}
        fi
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellHook {
    Python,
    Go,
    Empty,
}

impl ShellHook {
    /// Pick the hook for a language, ignoring case. Anything unknown gets
    /// the empty hook.
    pub fn for_language(language: &str) -> Self {
        match language.to_lowercase().as_str() {
            "python" => ShellHook::Python,
            "go" => ShellHook::Go,
            _ => ShellHook::Empty,
        }
    }

    /// Template source; `{{ name }}` is filled in at render time.
    pub fn template(&self) -> &'static str {
        match self {
            ShellHook::Python => PYTHON_SHELL_HOOK,
            ShellHook::Go => GO_SHELL_HOOK,
            ShellHook::Empty => "",
        }
    }

    pub fn all() -> [ShellHook; 3] {
        [ShellHook::Python, ShellHook::Go, ShellHook::Empty]
    }
}

impl std::fmt::Display for ShellHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShellHook::Python => "python",
            ShellHook::Go => "go",
            ShellHook::Empty => "empty",
        };
        f.write_str(name)
    }
}
