// src/cli.rs
use std::{env, error::Error, thread, time::Instant};

use crate::config::options::SyncOptions;
use crate::report::LabReport;
use crate::scheduler::Scheduler;
use crate::store::{Phase, ReportStore};
use crate::sync;

pub struct Params {
    pub sync: SyncOptions,
    pub watch: bool,
    pub json: bool,
    pub history: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            sync: SyncOptions::default(),
            watch: false,
            json: false,
            history: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut store = ReportStore::default();

    if !params.watch {
        sync_once(&params, &mut store);
        return Ok(());
    }

    // Watch mode: same scheduler the GUI uses, driven by sleeps.
    let mut sched = Scheduler::new(params.sync.refresh_interval());
    sched.start();
    loop {
        let now = Instant::now();
        if sched.due(now) {
            sched.mark(now);
            sync_once(&params, &mut store);
        }
        thread::sleep(sched.time_to_next(Instant::now()).max(std::time::Duration::from_secs(1)));
    }
}

fn sync_once(params: &Params, store: &mut ReportStore) {
    let result = sync::fetch_reports(&params.sync).map_err(|e| e.to_string());
    if let Err(msg) = &result {
        eprintln!("Warning: {msg}");
    }
    store.apply(result);
    render(params, store);
}

fn render(params: &Params, store: &ReportStore) {
    if store.phase() == Phase::Empty {
        println!("No report available yet.");
        return;
    }

    if params.json {
        let out = if params.history {
            serde_json::to_string_pretty(store.reports())
        } else {
            serde_json::to_string_pretty(&store.latest())
        };
        match out {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON error: {e}"),
        }
        return;
    }

    if params.history {
        for r in store.reports() {
            print_report(r);
            println!();
        }
    } else if let Some(r) = store.latest() {
        print_report(r);
    }
}

fn print_report(r: &LabReport) {
    println!("Test date: {}", r.date);
    println!("Fat:       {}", r.fat);
    println!("SNF:       {}", r.snf);
    println!("Status:    {}", r.status);
    println!("FSSAI:     {}", r.fssai);
    if let Some(links) = crate::core::drive::resolve(&r.file_url) {
        println!("Report:    {} ({})", r.file_name, links.open);
    } else {
        println!("Report:    {} (not uploaded yet)", r.file_name);
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--watch" | "-w" => params.watch = true,
            "--json" => params.json = true,
            "--history" => params.history = true,
            "--interval" => {
                let v: u64 = args.next().ok_or("Missing value for --interval")?.parse()?;
                if v == 0 {
                    return Err("Interval must be at least 1 minute".into());
                }
                params.sync.refresh_minutes = v;
            }
            "--sheet" => {
                params.sync.doc_id = args.next().ok_or("Missing value for --sheet")?;
            }
            "--worksheet" => {
                params.sync.worksheet = args.next().ok_or("Missing value for --worksheet")?;
            }
            "--host" => {
                params.sync.host = args.next().ok_or("Missing value for --host")?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
