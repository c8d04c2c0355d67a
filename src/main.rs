use kakao_cafe::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    app::run(flags)
}
