use flakegen::generator::{FlakeGenerator, FLAKE_TEMPLATE, FLAKE_TEMPLATE_NAME};
use flakegen::hooks::{ShellHook, HOOK_TEMPLATE_NAME};
use flakegen::{generate, Descriptor, FlakeError};

fn descriptor(name: &str, language: &str, packages: &[&str]) -> Descriptor {
    Descriptor::new(
        name,
        language,
        packages.iter().map(|p| p.to_string()).collect(),
        None,
        "x86_64-linux",
    )
}

#[test]
fn test_full_go_flake() {
    let flake = generate(&descriptor("myapp", "go", &[])).unwrap();
    let expected = r#"
{
  description = "Dev Shell Flake";

  inputs = {
    nixpkgs.url = "nixpkgs/nixos-unstable";
  };

  outputs = { self, nixpkgs, ... }: let
    system = "x86_64-linux"; # Change to your system if needed
    pkgs = import nixpkgs {
      inherit system;
    };
  in {
    devShells.${system}.default = pkgs.mkShell {
      buildInputs = with pkgs; [
        go
      ];

      shellHook = ''
        echo "🐹 Welcome to the myapp dev shell!"

        if [ ! -e go.mod ]; then
          echo "🔧 Creating go mod file"
          go mod init myapp
        fi
'';
    };
  };
}
"#;
    assert_eq!(flake, expected);
}

#[test]
fn test_hook_follows_language_case_insensitively() {
    let generator = FlakeGenerator::for_descriptor(&descriptor("a", "GO", &[])).unwrap();
    assert_eq!(generator.hook(), ShellHook::Go);

    let generator = FlakeGenerator::for_descriptor(&descriptor("a", "ruby", &[])).unwrap();
    assert_eq!(generator.hook(), ShellHook::Empty);
}

#[test]
fn test_rendering_is_deterministic() {
    let d = descriptor("svc", "rust", &["openssl", "pkg-config"]);
    assert_eq!(generate(&d).unwrap(), generate(&d).unwrap());
}

#[test]
fn test_description_is_not_escaped() {
    let d = Descriptor::new("a", "go", Vec::new(), Some("say \"hi\"".into()), "x86_64-linux");
    let flake = generate(&d).unwrap();
    assert!(flake.contains("description = \"say \"hi\"\";"));
}

#[test]
fn test_flake_template_includes_hook_by_name() {
    assert!(FLAKE_TEMPLATE.contains(&format!("{{% include \"{}\" %}}", HOOK_TEMPLATE_NAME)));
}

#[test]
fn test_every_hook_composes_with_flake_template() {
    for hook in ShellHook::all() {
        let generator = FlakeGenerator::new(hook).unwrap();
        let flake = generator.render(&descriptor("demo", "any", &[])).unwrap();
        assert!(flake.contains("shellHook = ''"));
    }
}

#[test]
fn test_template_referencing_unknown_field_fails_to_render() {
    let template = FLAKE_TEMPLATE.replace("{{ system }}", "{{ platform }}");
    let generator = FlakeGenerator::with_flake_template(ShellHook::Go, &template).unwrap();

    let err = generator.render(&descriptor("a", "go", &[])).unwrap_err();
    assert!(matches!(err, FlakeError::TemplateExec(_)));
}

#[test]
fn test_unparsable_template_names_the_template() {
    let err = FlakeGenerator::with_flake_template(ShellHook::Go, "{% if %}")
        .err()
        .unwrap();
    assert!(matches!(err, FlakeError::TemplateParse { .. }));
    assert!(err.to_string().contains(FLAKE_TEMPLATE_NAME));
}
