use campus_core::responses::PingResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reachable = ctx.api.ping().await;
    output(
        &PingResponse {
            base_url: ctx.api.base_url().to_string(),
            reachable,
        },
        flags.format,
    )
}
