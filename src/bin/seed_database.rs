//! Specimen Catalogue Seeder
//!
//! Posts a small reference collection to a running catalogue API: countries,
//! states and counties (including the Louisiana parishes, Alaska boroughs and
//! census areas, and a Colorado county line), localities with GPS points, a
//! collecting trip, one Lepidoptera lineage, people, and a few specimens.
//!
//! Usage:
//!   `cargo run --bin seed_database -- --url http://localhost:3000 --token YOUR_JWT_TOKEN`

use anyhow::{Context, Result, anyhow};
use clap::{Arg, Command};
use console::style;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Method};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SeedingConfig {
    pub base_url: String,
    pub jwt_token: String,
    pub client: Client,
}

/// Ids of created records, keyed by a human-readable name.
#[derive(Debug, Default)]
pub struct CreatedObjects {
    pub countries: HashMap<String, String>,
    pub states: HashMap<String, String>,
    pub counties: HashMap<String, String>,
    pub localities: HashMap<String, String>,
    pub gps: HashMap<String, String>,
    pub collecting_trips: HashMap<String, String>,
    pub taxa: HashMap<String, String>,
    pub people: HashMap<String, String>,
    pub specimens: Vec<Value>,
}

pub struct DatabaseSeeder {
    config: SeedingConfig,
    created_objects: CreatedObjects,
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}",
            )?
            .progress_chars("##-"),
    );
    Ok(pb)
}

fn id_of(record: &Value) -> Result<String> {
    record["id"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Response has no id: {record}"))
}

fn lookup<'a>(ids: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    ids.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("'{name}' was not created"))
}

impl DatabaseSeeder {
    pub fn new(base_url: String, jwt_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config: SeedingConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                jwt_token,
                client,
            },
            created_objects: CreatedObjects::default(),
        })
    }

    async fn make_request(&self, method: Method, endpoint: &str, data: Option<Value>) -> Result<Value> {
        send(&self.config, method, endpoint, data).await
    }

    /// POST many records of one kind at once, returning them in request order
    async fn create_all(&self, endpoint: &str, payloads: Vec<Value>, pb: &ProgressBar) -> Result<Vec<Value>> {
        let tasks = payloads.into_iter().map(|payload| {
            let config = self.config.clone();
            let pb = pb.clone();
            let endpoint = endpoint.to_string();
            async move {
                let result = send(&config, Method::POST, &endpoint, Some(payload)).await;
                pb.inc(1);
                result
            }
        });

        join_all(tasks).await.into_iter().collect()
    }

    pub async fn test_connection(&self) -> Result<()> {
        self.make_request(Method::GET, "/healthz", None)
            .await
            .context("API is not reachable")?;
        Ok(())
    }

    pub async fn create_geography(&mut self) -> Result<()> {
        println!("{} Creating countries, states and counties...", style("[1/5]").bold().dim());

        let countries = [
            ("United States of America", "USA"),
            ("Canada", "CAN"),
            ("Mexico", "MEX"),
        ];
        let states = [
            ("USA", "Alaska", "AK"),
            ("USA", "Colorado", "CO"),
            ("USA", "Indiana", "IN"),
            ("USA", "Kentucky", "KY"),
            ("USA", "Louisiana", "LA"),
            ("USA", "Mississippi", "MS"),
            ("USA", "Tennessee", "TN"),
            ("CAN", "Prince Edward Island", "PEI"),
        ];
        let counties = [
            ("IN", "Switzerland"),
            ("IN", "Jefferson"),
            ("LA", "Rapides"),
            ("AK", "Fairbanks N. Star"),
            ("AK", "Yukon-Koyukuk Census Area"),
            ("CO", "Clear Creek/Summit"),
        ];

        let pb = progress_bar(countries.len() + states.len() + counties.len())?;

        pb.set_message("Countries");
        let payloads = countries
            .iter()
            .map(|(name, abbr)| json!({ "name": name, "abbr": abbr }))
            .collect();
        for (record, (_, abbr)) in self.create_all("/api/countries", payloads, &pb).await?.iter().zip(countries) {
            self.created_objects.countries.insert(abbr.to_string(), id_of(record)?);
        }

        pb.set_message("States");
        let mut payloads = Vec::new();
        for (country, name, abbr) in states {
            let country_id = lookup(&self.created_objects.countries, country)?;
            payloads.push(json!({ "country_id": country_id, "name": name, "abbr": abbr }));
        }
        for (record, (_, _, abbr)) in self.create_all("/api/states", payloads, &pb).await?.iter().zip(states) {
            self.created_objects.states.insert(abbr.to_string(), id_of(record)?);
        }

        pb.set_message("Counties");
        let mut payloads = Vec::new();
        for (state, name) in counties {
            let state_id = lookup(&self.created_objects.states, state)?;
            payloads.push(json!({ "state_id": state_id, "name": name }));
        }
        for (record, (_, name)) in self.create_all("/api/counties", payloads, &pb).await?.iter().zip(counties) {
            println!("   {} {}", style("•").dim(), record["full_name"].as_str().unwrap_or(name));
            self.created_objects.counties.insert(name.to_string(), id_of(record)?);
        }

        pb.finish_with_message("Geography created!");
        Ok(())
    }

    pub async fn create_localities(&mut self) -> Result<()> {
        println!("{} Creating localities, GPS points and trips...", style("[2/5]").bold().dim());

        let switzerland = lookup(&self.created_objects.counties, "Switzerland")?.to_string();
        let jefferson = lookup(&self.created_objects.counties, "Jefferson")?.to_string();
        let fairbanks = lookup(&self.created_objects.counties, "Fairbanks N. Star")?.to_string();
        let pei = lookup(&self.created_objects.states, "PEI")?.to_string();
        let mexico = lookup(&self.created_objects.countries, "MEX")?.to_string();

        let localities = vec![
            ("Boone Robinson Rd", json!({ "name": "Boone Robinson Rd", "range": "4 km NW", "town": "Patriot", "county_id": switzerland })),
            ("Big Oaks NWR", json!({ "name": "Big Oaks NWR", "town": "Madison", "county_id": jefferson })),
            ("Bonanza Creek", json!({ "name": "Bonanza Creek Experimental Forest", "range": "23 km SW", "town": "Ester", "county_id": fairbanks })),
            ("Montague", json!({ "town": "Montague", "state_id": pei })),
            ("Mexico City", json!({ "town": "Mexico City", "country_id": mexico })),
        ];

        let pb = progress_bar(localities.len() + 2)?;
        let (keys, payloads): (Vec<_>, Vec<_>) = localities.into_iter().unzip();
        for (record, key) in self.create_all("/api/localities", payloads, &pb).await?.iter().zip(keys) {
            println!("   {} {}", style("•").dim(), record["display_name"].as_str().unwrap_or(key));
            self.created_objects.localities.insert(key.to_string(), id_of(record)?);
        }

        let locality_id = lookup(&self.created_objects.localities, "Boone Robinson Rd")?;
        pb.set_message("GPS");
        let gps = self
            .make_request(
                Method::POST,
                "/api/gps_coordinates",
                Some(json!({
                    "locality_id": locality_id,
                    "latitude": "38.849500",
                    "longitude": "-84.866328",
                    "elevation": "252",
                })),
            )
            .await?;
        self.created_objects.gps.insert("Boone Robinson Rd".to_string(), id_of(&gps)?);
        pb.inc(1);

        pb.set_message("Collecting trip");
        let trip = self
            .make_request(
                Method::POST,
                "/api/collecting_trips",
                Some(json!({
                    "name": "LepSoc 2008",
                    "start_date": "2008-07-01",
                    "end_date": "2008-07-06",
                    "notes": "Annual meeting field trips",
                })),
            )
            .await?;
        let trip_id = id_of(&trip)?;
        let state_ids = vec![
            lookup(&self.created_objects.states, "MS")?,
            lookup(&self.created_objects.states, "TN")?,
        ];
        self.make_request(
            Method::PUT,
            &format!("/api/collecting_trips/{trip_id}/states"),
            Some(json!({ "state_ids": state_ids })),
        )
        .await?;
        self.created_objects.collecting_trips.insert("LepSoc 2008".to_string(), trip_id);
        pb.inc(1);

        pb.finish_with_message("Localities created!");
        Ok(())
    }

    pub async fn create_taxonomy(&mut self) -> Result<()> {
        println!("{} Creating a Lepidoptera lineage...", style("[3/5]").bold().dim());

        // Each level links to the one created before it
        let lineage = [
            ("/api/orders", None, json!({ "name": "Lepidoptera", "common_name": "Butterflies and moths", "authority": "Linnaeus, 1758" })),
            ("/api/families", Some("order_id"), json!({ "name": "Papilionidae", "common_name": "Swallowtails", "authority": "Latreille, [1802]" })),
            ("/api/subfamilies", Some("family_id"), json!({ "name": "Papilioninae", "authority": "Latreille, [1802]" })),
            ("/api/tribes", Some("subfamily_id"), json!({ "name": "Papilionini", "authority": "Latreille, [1802]" })),
            ("/api/genera", Some("tribe_id"), json!({ "name": "Papilio", "authority": "Linnaeus, 1758" })),
            ("/api/species", Some("genus_id"), json!({ "name": "polyxenes", "common_name": "Black Swallowtail", "authority": "Fabricius, 1775", "mona": "4159", "p3": "770203", "ps": "9" })),
            ("/api/subspecies", Some("species_id"), json!({ "name": "asterius", "common_name": "Eastern Black Swallowtail", "authority": "Stoll, 1782" })),
        ];

        let pb = progress_bar(lineage.len())?;
        let mut parent_id: Option<String> = None;
        for (endpoint, parent_field, mut payload) in lineage {
            if let (Some(field), Some(id)) = (parent_field, &parent_id) {
                payload[field] = json!(id);
            }
            let name = payload["name"].as_str().unwrap_or_default().to_string();
            pb.set_message(format!("Creating: {name}"));

            let record = self.make_request(Method::POST, endpoint, Some(payload)).await?;
            let id = id_of(&record)?;
            self.created_objects.taxa.insert(name, id.clone());
            parent_id = Some(id);
            pb.inc(1);
        }

        pb.finish_with_message("Taxonomy created!");
        Ok(())
    }

    pub async fn create_people(&mut self) -> Result<()> {
        println!("{} Creating collectors and determiners...", style("[4/5]").bold().dim());

        let people = [
            ("Paul", None, "Smith", Some("Jr.")),
            ("John", Some("Q"), "Doe", None),
            ("Mary", None, "McCarty", None),
            ("Tom", None, "Williams", Some("III")),
        ];

        let pb = progress_bar(people.len())?;
        let payloads = people
            .iter()
            .map(|(first, middle, last, suffix)| {
                json!({ "first_name": first, "middle_initial": middle, "last_name": last, "suffix": suffix })
            })
            .collect();
        for (record, (_, _, last, _)) in self.create_all("/api/people", payloads, &pb).await?.iter().zip(people) {
            self.created_objects.people.insert(last.to_string(), id_of(record)?);
        }

        pb.finish_with_message("People created!");
        Ok(())
    }

    pub async fn create_specimens(&mut self) -> Result<()> {
        println!("{} Creating specimen records...", style("[5/5]").bold().dim());

        let objects = &self.created_objects;
        let species_id = lookup(&objects.taxa, "polyxenes")?;
        let subspecies_id = lookup(&objects.taxa, "asterius")?;
        let genus_id = lookup(&objects.taxa, "Papilio")?;
        let smith = lookup(&objects.people, "Smith")?;
        let doe = lookup(&objects.people, "Doe")?;
        let mccarty = lookup(&objects.people, "McCarty")?;

        let specimens = vec![
            (
                json!({
                    "usi": "KLM-0001",
                    "genus_id": genus_id,
                    "species_id": species_id,
                    "subspecies_id": subspecies_id,
                    "determiner_id": smith,
                    "determined_year": 2007,
                    "sex": "male",
                    "preparer_id": doe,
                    "preparation": "spread",
                    "preparation_date": "2006-07-02",
                    "country_id": lookup(&objects.countries, "USA")?,
                    "state_id": lookup(&objects.states, "IN")?,
                    "county_id": lookup(&objects.counties, "Switzerland")?,
                    "locality_id": lookup(&objects.localities, "Boone Robinson Rd")?,
                    "gps_id": lookup(&objects.gps, "Boone Robinson Rd")?,
                    "day": 26,
                    "month": "June",
                    "year": 2006,
                    "method": "Net",
                    "weather": "Sunny",
                    "temperature": "85.5",
                    "time_of_day": "Afternoon",
                    "habitat": "Old field",
                }),
                vec![smith, doe],
            ),
            (
                json!({
                    "usi": "KLM-0002",
                    "genus_id": genus_id,
                    "stage": "larva",
                    "collecting_trip_id": lookup(&objects.collecting_trips, "LepSoc 2008")?,
                    "country_id": lookup(&objects.countries, "USA")?,
                    "state_id": lookup(&objects.states, "TN")?,
                    "month": "July",
                    "year": 2008,
                    "method": "Reared",
                    "temperature": "76",
                }),
                vec![mccarty],
            ),
        ];

        let pb = progress_bar(specimens.len())?;
        let mut created = Vec::new();
        for (payload, collectors) in specimens {
            pb.set_message(format!("Creating: {}", payload["usi"]));
            let record = self
                .make_request(Method::POST, "/api/specimen_records", Some(payload))
                .await?;
            let record = self
                .make_request(
                    Method::PUT,
                    &format!("/api/specimen_records/{}/collectors", id_of(&record)?),
                    Some(json!({ "person_ids": collectors })),
                )
                .await?;
            created.push(record);
            pb.inc(1);
        }
        pb.finish_with_message("Specimens created!");

        for record in &created {
            println!(
                "   {} {} {} ({}, {})",
                style("•").dim(),
                style(record["usi"].as_str().unwrap_or_default()).bold(),
                record["taxon"]["name"].as_str().unwrap_or("unidentified"),
                record["collected_date"].as_str().unwrap_or_default(),
                record["collectors"].as_str().unwrap_or_default(),
            );
        }
        self.created_objects.specimens = created;

        Ok(())
    }

    pub async fn seed_database(&mut self) -> Result<()> {
        println!();
        println!("{}", style("Specimen Catalogue Seeder").bold().blue());
        println!("{}", style("Creating a reference collection...").dim());
        println!();

        self.test_connection().await?;
        self.create_geography().await?;
        self.create_localities().await?;
        self.create_taxonomy().await?;
        self.create_people().await?;
        self.create_specimens().await?;

        self.display_summary();
        Ok(())
    }

    fn display_summary(&self) {
        let objects = &self.created_objects;
        println!();
        println!("{}", style("Database Seeding Complete!").bold().green());
        println!("{}", style("=".repeat(50)).dim());

        let summary_data = [
            ("Countries", objects.countries.len()),
            ("States", objects.states.len()),
            ("Counties", objects.counties.len()),
            ("Localities", objects.localities.len()),
            ("GPS points", objects.gps.len()),
            ("Collecting trips", objects.collecting_trips.len()),
            ("Taxa", objects.taxa.len()),
            ("People", objects.people.len()),
            ("Specimens", objects.specimens.len()),
        ];

        for (name, count) in summary_data {
            if count > 0 {
                println!("{:.<20} {}", style(name).cyan(), style(count).bold().green());
            }
        }
        println!();
    }
}

async fn send(config: &SeedingConfig, method: Method, endpoint: &str, data: Option<Value>) -> Result<Value> {
    let url = format!("{}{}", config.base_url, endpoint);

    let mut request = config
        .client
        .request(method, &url)
        .header("authorization", format!("Bearer {}", config.jwt_token));
    if let Some(json_data) = data {
        request = request.json(&json_data);
    }
    let response = request
        .send()
        .await
        .with_context(|| format!("Request error {endpoint}"))?;

    if response.status().is_success() {
        Ok(response.json::<Value>().await?)
    } else {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        Err(anyhow!("HTTP {status} {endpoint}: {error_text}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("Specimen Catalogue Seeder")
        .version("1.0")
        .about("Seeds the specimen catalogue with a small reference collection")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("API base URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("JWT_TOKEN")
                .help("JWT authentication token")
                .required(true),
        )
        .get_matches();

    let base_url = matches
        .get_one::<String>("url")
        .cloned()
        .context("Missing API URL")?;
    let jwt_token = matches
        .get_one::<String>("token")
        .cloned()
        .context("Missing JWT token")?;

    println!("{}", style("Specimen Catalogue Seeder v1.0").bold());
    println!("{}", style("-".repeat(40)).dim());
    println!("API URL: {}", style(&base_url).cyan());
    println!(
        "Token:   {}...{}",
        style("*".repeat(8)).dim(),
        style(&jwt_token[jwt_token.len().saturating_sub(8)..]).dim()
    );

    let mut seeder = DatabaseSeeder::new(base_url, jwt_token)?;
    seeder.seed_database().await?;

    Ok(())
}
