// SPDX-License-Identifier: MPL-2.0

use adverse_lens::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_url: args.opt_value_from_str("--api-url").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    // Config paths are resolved through a process-wide override, set once
    // before anything reads the config file.
    paths::init_cli_override(flags.config_dir.clone());

    app::run(flags)
}
