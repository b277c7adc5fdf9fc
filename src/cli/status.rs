use crate::db::get_connection;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("libreta.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let conn = get_connection(&db_path)?;

        let companies: i64 = conn.query_row("SELECT count(*) FROM companies", [], |r| r.get(0))?;
        let accounts: i64 =
            conn.query_row("SELECT count(*) FROM accounting_accounts", [], |r| r.get(0))?;
        let segments: i64 = conn.query_row("SELECT count(*) FROM segments", [], |r| r.get(0))?;
        let movements: i64 = conn.query_row("SELECT count(*) FROM movements", [], |r| r.get(0))?;
        let imports: i64 = conn.query_row("SELECT count(*) FROM imports", [], |r| r.get(0))?;

        println!();
        println!("Companies:  {companies}");
        println!("Accounts:   {accounts}");
        println!("Segments:   {segments}");
        println!("Movements:  {movements}");
        println!("Imports:    {imports}");
    } else {
        println!();
        println!("Database not found. Run `libreta init` to set up.");
    }

    Ok(())
}
