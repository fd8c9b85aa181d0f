use std::io::{
    BufRead,
    Write,
};

use spycat::{
    api::{
        BreedSource,
        CatStore,
        HttpBreedSource,
        HttpCatStore,
    },
    core::{
        http::http_client,
        CatId,
    },
    interaction::{
        Interaction,
        TerminalInteraction,
    },
    persistence::Settings,
    view::{
        render_breeds,
        render_table,
        resolve_breed,
    },
    CatController,
    SpyCatError,
};
use tracing::{
    error,
    info,
};

const HELP: &str = "\
Commands:
  list          show all cats
  breeds        show the breed list
  add           fill in a new cat and submit it
  edit <id>     change a cat's salary
  delete <id>   delete a cat
  reload        fetch cats and breeds again
  help          show this help
  quit          exit
";

type Dashboard<S, B, R, W> = CatController<S, B, TerminalInteraction<R, W>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let settings = Settings::load_or_init();
    info!(api = %settings.api_base_url, breeds = %settings.breeds_url, "starting spycat");

    let client = http_client(settings.request_timeout())?;
    let store = HttpCatStore::new(client.clone(), settings.api_base_url.clone());
    let breed_source = HttpBreedSource::new(client, settings.breeds_url.clone());
    let mut dashboard = CatController::new(store, breed_source, TerminalInteraction::stdio());

    dashboard.interaction_mut().write("Spy Cats Dashboard\n\n");
    report(dashboard.load_all().await);
    show_records(&mut dashboard);

    loop {
        dashboard.interaction_mut().write("> ");
        let Some(line) = dashboard.interaction_mut().read_line() else {
            break;
        };

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match command {
            "" => continue,
            "list" | "ls" => show_records(&mut dashboard),
            "breeds" => {
                let text = render_breeds(dashboard.breeds());
                dashboard.interaction_mut().write(&text);
            }
            "add" => {
                fill_draft(&mut dashboard);
                let result = dashboard.submit_draft().await;
                let created = result.is_ok();
                report(result);
                if created {
                    show_records(&mut dashboard);
                }
            }
            "edit" => {
                if let Some(id) = parse_id(&mut dashboard, arg) {
                    report(dashboard.update_salary(id).await);
                    show_records(&mut dashboard);
                }
            }
            "delete" | "rm" => {
                if let Some(id) = parse_id(&mut dashboard, arg) {
                    report(dashboard.delete_record(id).await);
                    show_records(&mut dashboard);
                }
            }
            "reload" => {
                report(dashboard.load_all().await);
                show_records(&mut dashboard);
            }
            "help" | "?" => {
                dashboard.interaction_mut().write(HELP);
            }
            "quit" | "exit" | "q" => break,
            other => {
                dashboard.interaction_mut().notify(&format!("Unknown command: {other} (try help)"))
            }
        }
    }

    info!("bye");
    Ok(())
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spycat=info"));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Logs failures the controller does not report to the user itself.
fn report(result: Result<(), SpyCatError>) {
    match result {
        Ok(()) | Err(SpyCatError::Validation(_)) => {}
        Err(e) => error!(error = %e, "operation failed"),
    }
}

fn show_records<S, B, R, W>(dashboard: &mut Dashboard<S, B, R, W>)
where
    S: CatStore,
    B: BreedSource,
    R: BufRead,
    W: Write,
{
    let table = render_table(dashboard.records());
    dashboard.interaction_mut().write(&table);
}

fn parse_id<S, B, R, W>(dashboard: &mut Dashboard<S, B, R, W>, arg: Option<&str>) -> Option<CatId>
where
    S: CatStore,
    B: BreedSource,
    R: BufRead,
    W: Write,
{
    match arg.map(str::parse::<CatId>) {
        Some(Ok(id)) => Some(id),
        _ => {
            dashboard.interaction_mut().notify("Usage: edit <id> | delete <id>");
            None
        }
    }
}

/// Prompts for every draft field, keeping what was typed last time as the default.
fn fill_draft<S, B, R, W>(dashboard: &mut Dashboard<S, B, R, W>)
where
    S: CatStore,
    B: BreedSource,
    R: BufRead,
    W: Write,
{
    let current = dashboard.draft().clone();

    let name = dashboard.interaction_mut().ask(&prompt_with("Name", &current.name));
    let years = dashboard.interaction_mut().ask(&prompt_with(
        "Experience Years",
        &current.experience_years.map(|y| y.to_string()).unwrap_or_default(),
    ));
    let breed = dashboard.interaction_mut().ask(&prompt_with("Breed", &current.breed));
    let salary = dashboard.interaction_mut().ask(&prompt_with(
        "Salary",
        &current.salary.map(|s| s.to_string()).unwrap_or_default(),
    ));

    let breed = breed.filter(|b| !b.is_empty()).map(|b| resolve_breed(dashboard.breeds(), &b));

    let draft = dashboard.draft_mut();
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        draft.set_name(name);
    }
    if let Some(years) = years.filter(|y| !y.is_empty()) {
        draft.set_experience_years(&years);
    }
    if let Some(breed) = breed {
        draft.set_breed(breed);
    }
    if let Some(salary) = salary.filter(|s| !s.is_empty()) {
        draft.set_salary(&salary);
    }
}

fn prompt_with(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{label}:")
    } else {
        format!("{label} [{current}]:")
    }
}
