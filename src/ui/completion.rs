// Shell completion generation support

use clap::Command;
use clap_complete::Generator;
use clap_complete::generate;

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_print_completions_does_not_panic() {
        let mut app = crate::ui::Cli::command();
        print_completions(clap_complete::Shell::Bash, &mut app);
    }
}
