use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::run(ctx, flags),
        Commands::Get(args) => commands::get::run(&args.id, ctx, flags),
        Commands::Save(args) => commands::save::run(&args, ctx, flags),
        Commands::Delete(args) => commands::delete::run(&args.id, ctx, flags),
        Commands::Preview(args) => commands::preview::run(&args, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
