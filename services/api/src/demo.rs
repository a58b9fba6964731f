use crate::infra::{InMemoryAdoptionStore, InMemoryReviewNotifier};
use clap::Args;
use shelter_hub::adoption::{load_sample_data, AdoptionService, PetRosterImporter, ShelterId};
use shelter_hub::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pet search the walkthrough runs across the seeded shelters
    #[arg(long, default_value = "truck")]
    pub(crate) search: String,
    /// Optional roster CSV listed under the originating shelter first
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Stop before submission and leave the application in progress
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RosterImportArgs {
    /// Shelter id receiving the listings (the demo seed uses shelter-000001
    /// and shelter-000002)
    #[arg(long)]
    pub(crate) shelter: String,
    /// Path to the roster CSV export (name,age with a header row)
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_roster_import(args: RosterImportArgs) -> Result<(), AppError> {
    let RosterImportArgs { shelter, csv } = args;

    let store = Arc::new(InMemoryAdoptionStore::default());
    let notifier = Arc::new(InMemoryReviewNotifier::default());
    let service = Arc::new(AdoptionService::new(store, notifier));
    let summary = load_sample_data(&service)?;

    let entries = PetRosterImporter::from_path(csv)?;
    println!("Parsed {} roster entries", entries.len());

    let shelter_id = ShelterId(shelter);
    let listed = match service.import_roster(&shelter_id, entries) {
        Ok(listed) => listed,
        Err(err) => {
            println!("Roster import rejected: {}", err);
            println!("Seeded shelters:");
            for shelter in &summary.shelters {
                println!("  - {} ({})", shelter.id, shelter.name);
            }
            return Ok(());
        }
    };

    for pet in &listed {
        println!("  - {}: {} (age {})", pet.id, pet.name, pet.age);
    }

    let view = service.shelter_page(&shelter_id)?;
    println!("{} now lists {} pets", view.shelter.name, view.pets.len());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        search,
        roster_csv,
        skip_submission,
    } = args;

    println!("Adoption workflow demo");
    let store = Arc::new(InMemoryAdoptionStore::default());
    let notifier = Arc::new(InMemoryReviewNotifier::default());
    let service = Arc::new(AdoptionService::new(store, notifier.clone()));

    let summary = load_sample_data(&service)?;
    println!("Seeded shelters:");
    for shelter in &summary.shelters {
        match service.shelter_page(&shelter.id) {
            Ok(view) => println!(
                "- {} [{}] in {} with {} pets",
                view.shelter.name,
                view.shelter.id,
                view.shelter.city,
                view.pets.len()
            ),
            Err(err) => {
                println!("  Shelter page unavailable: {}", err);
                return Ok(());
            }
        }
    }

    let mut application = summary.application;
    let host_id = application.shelter_id.clone();

    if let Some(path) = roster_csv {
        let entries = PetRosterImporter::from_path(path)?;
        let listed = match service.import_roster(&host_id, entries) {
            Ok(listed) => listed,
            Err(err) => {
                println!("  Roster import rejected: {}", err);
                return Ok(());
            }
        };
        println!("Roster import listed {} extra pets:", listed.len());
        for pet in &listed {
            println!("  - {} (age {})", pet.name, pet.age);
        }
    }

    println!(
        "\nApplication {} opened by {} -> status {}",
        application.id,
        application.name,
        application.status.label()
    );
    for pet_id in &application.pet_ids {
        match service.pet_page(pet_id) {
            Ok(view) => println!("  - wants {} ({})", view.pet.name, view.shelter_name),
            Err(err) => {
                println!("  Pet lookup failed: {}", err);
                return Ok(());
            }
        }
    }

    println!("\nSearching every shelter for '{}'", search);
    let matches = match service.search_pets(&search) {
        Ok(matches) => matches,
        Err(err) => {
            println!("  Search unavailable: {}", err);
            return Ok(());
        }
    };
    if matches.is_empty() {
        println!("  No pets matched");
    }
    for result in &matches {
        println!(
            "  - {} (age {}) at {}",
            result.pet.name, result.pet.age, result.shelter_name
        );
    }

    if let Some(found) = matches.iter().find(|m| !application.wants(&m.pet.id)) {
        application = match service.attach_pet(&application.id, &found.pet.id) {
            Ok(updated) => updated,
            Err(err) => {
                println!("  Adoption failed: {}", err);
                return Ok(());
            }
        };
        println!(
            "Adopted {} onto the application ({} pets wanted)",
            found.pet.name,
            application.pet_ids.len()
        );
    }

    if skip_submission {
        println!(
            "\nSkipping submission; the application stays {}",
            application.status.label()
        );
        return Ok(());
    }

    println!("\nSubmitting for review");
    let submitted = match service.submit_application(&application.id, &application.description) {
        Ok(submitted) => submitted,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!("- Status: {}", submitted.status.label());
    if let Some(date) = submitted.submitted_on {
        println!("- Submitted on {}", date.format("%B %d, %Y"));
    }

    let notices = notifier.notices();
    if notices.is_empty() {
        println!("  Review notices: none dispatched");
    } else {
        println!("  Review notices:");
        for notice in notices {
            println!(
                "    - {} reviews {} for {}",
                notice.shelter_id,
                notice.pet_names.join(", "),
                notice.applicant_name
            );
        }
    }

    Ok(())
}
