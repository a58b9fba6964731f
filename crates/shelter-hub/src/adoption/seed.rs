//! Sample records for development seeding and the demo walkthrough.

use super::domain::{Application, NewPet, NewShelter, Pet, Shelter};
use super::intake::ApplicationForm;
use super::repository::{AdoptionStore, ReviewNotifier};
use super::service::{AdoptionService, AdoptionServiceError};

/// Records created by [`load_sample_data`].
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub shelters: Vec<Shelter>,
    pub pets: Vec<Pet>,
    pub application: Application,
}

/// Seed two shelters, four pets, and one in-progress application with two
/// pets already attached.
pub fn load_sample_data<S, N>(
    service: &AdoptionService<S, N>,
) -> Result<SeedSummary, AdoptionServiceError>
where
    S: AdoptionStore + 'static,
    N: ReviewNotifier + 'static,
{
    let emporium = service.register_shelter(NewShelter {
        name: "Craig's Raccoon Emporium".to_string(),
        city: "Omaha".to_string(),
        rank: Some(1),
        foster_program: None,
    })?;
    let aurora = service.register_shelter(NewShelter {
        name: "Aurora shelter".to_string(),
        city: "Aurora, CO".to_string(),
        rank: Some(9),
        foster_program: Some(false),
    })?;

    let king = service.add_pet(NewPet {
        shelter_id: emporium.id.clone(),
        name: "King Trash Mouth".to_string(),
        age: 14,
    })?;
    let princess = service.add_pet(NewPet {
        shelter_id: emporium.id.clone(),
        name: "Princess Dumptruck".to_string(),
        age: 18,
    })?;
    let eggs = service.add_pet(NewPet {
        shelter_id: aurora.id.clone(),
        name: "Eggs Sinclair".to_string(),
        age: 10,
    })?;
    let wendy = service.add_pet(NewPet {
        shelter_id: aurora.id.clone(),
        name: "Monster Truck Wendy".to_string(),
        age: 5,
    })?;

    let application = service.open_application(
        &emporium.id,
        ApplicationForm {
            name: "Gob Beldof".to_string(),
            address: "152 Animal Ave.".to_string(),
            city: "Omaha".to_string(),
            state: "NE".to_string(),
            zip_code: "19593".to_string(),
            description: "We love raccoons and would like more please. They will live a good \
                          life and will not have to eat carrots. Ever."
                .to_string(),
        },
    )?;
    service.attach_pet(&application.id, &princess.id)?;
    let application = service.attach_pet(&application.id, &eggs.id)?;

    Ok(SeedSummary {
        shelters: vec![emporium, aurora],
        pets: vec![king, princess, eggs, wendy],
        application,
    })
}
