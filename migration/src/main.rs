use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    // 未设置 DATABASE_URL 时，cli 会提示通过 -u 参数传入
    cli::run_cli(migration::Migrator).await;
}
