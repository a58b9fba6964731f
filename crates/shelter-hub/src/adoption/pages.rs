//! Hand-rendered HTML for the adopter-facing pages.

use std::fmt::Write as _;

use super::domain::Shelter;
use super::intake::ApplicationForm;
use super::views::{ApplicationPageView, PetWithShelter, ShelterPageView};

pub(crate) fn render_shelter_index(shelters: &[Shelter]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Shelters</h1>\n");

    if shelters.is_empty() {
        body.push_str("<p>No shelters are listed yet.</p>\n");
    } else {
        body.push_str("<ul class=\"shelters\">\n");
        for shelter in shelters {
            writeln!(
                body,
                "<li><a href=\"/shelters/{}\">{}</a> ({})</li>",
                shelter.id,
                escape_html(&shelter.name),
                escape_html(&shelter.city)
            )
            .expect("write shelter row");
        }
        body.push_str("</ul>\n");
    }

    layout("Shelters", &body)
}

pub(crate) fn render_shelter_page(view: &ShelterPageView) -> String {
    let mut body = String::new();
    writeln!(body, "<h1>{}</h1>", escape_html(&view.shelter.name)).expect("write heading");
    writeln!(body, "<p>{}</p>", escape_html(&view.shelter.city)).expect("write city");

    if let Some(rank) = view.shelter.rank {
        writeln!(body, "<p>Rank: {}</p>", rank).expect("write rank");
    }
    if let Some(foster) = view.shelter.foster_program {
        let note = if foster {
            "Foster program available"
        } else {
            "No foster program"
        };
        writeln!(body, "<p>{}</p>", note).expect("write foster note");
    }

    writeln!(
        body,
        "<p><a href=\"/shelters/{}/apps/new\">Begin a new application</a></p>",
        view.shelter.id
    )
    .expect("write application link");

    body.push_str("<h2>Adoptable Pets</h2>\n");
    if view.pets.is_empty() {
        body.push_str("<p>No pets are listed at this shelter.</p>\n");
    } else {
        body.push_str("<ul class=\"pets\">\n");
        for pet in &view.pets {
            writeln!(
                body,
                "<li><a href=\"/pets/{}\">{}</a>, age {}</li>",
                pet.id,
                escape_html(&pet.name),
                pet.age
            )
            .expect("write pet row");
        }
        body.push_str("</ul>\n");
    }

    layout(&view.shelter.name, &body)
}

pub(crate) fn render_new_application_page(
    shelter: &Shelter,
    form: &ApplicationForm,
    errors: &[String],
) -> String {
    let mut body = String::new();
    body.push_str("<h1>New Adoption Application</h1>\n");
    writeln!(
        body,
        "<p>Apply to adopt from {}.</p>",
        escape_html(&shelter.name)
    )
    .expect("write shelter note");

    if !errors.is_empty() {
        body.push_str("<ul class=\"form-errors\">\n");
        for error in errors {
            writeln!(body, "<li>{}</li>", escape_html(error)).expect("write form error");
        }
        body.push_str("</ul>\n");
    }

    writeln!(
        body,
        "<form method=\"post\" action=\"/shelters/{}/apps\">",
        shelter.id
    )
    .expect("write form open");
    push_text_field(&mut body, "name", "Name", &form.name);
    push_text_field(&mut body, "address", "Street Address", &form.address);
    push_text_field(&mut body, "city", "City", &form.city);
    push_text_field(&mut body, "state", "State", &form.state);
    push_text_field(&mut body, "zip_code", "Zip Code", &form.zip_code);
    writeln!(
        body,
        "<p><label for=\"description\">Description</label><br><textarea id=\"description\" name=\"description\">{}</textarea></p>",
        escape_html(&form.description)
    )
    .expect("write description field");
    body.push_str("<p><button type=\"submit\">Submit</button></p>\n</form>\n");

    layout("New Adoption Application", &body)
}

pub(crate) fn render_application_page(view: &ApplicationPageView) -> String {
    let application = &view.application;

    let mut body = String::new();
    body.push_str("<h1>Adoption Application</h1>\n");
    writeln!(body, "<p>{}</p>", escape_html(&application.name)).expect("write applicant name");
    writeln!(body, "<p>{}</p>", escape_html(&application.address)).expect("write address");
    writeln!(body, "<p>{}</p>", escape_html(&locality_line(view))).expect("write locality");
    if !application.description.is_empty() {
        writeln!(
            body,
            "<p class=\"description\">{}</p>",
            escape_html(&application.description)
        )
        .expect("write description");
    }
    writeln!(body, "<p>Status: {}</p>", application.status.label()).expect("write status");
    writeln!(
        body,
        "<p>Opened on {}</p>",
        application.opened_on.format("%B %d, %Y")
    )
    .expect("write opened date");
    if let Some(submitted_on) = application.submitted_on {
        writeln!(body, "<p>Submitted on {}</p>", submitted_on.format("%B %d, %Y"))
            .expect("write submitted date");
    }

    body.push_str("<section id=\"pets_wanted\">\n<h2>Pets on this Application</h2>\n");
    if view.pets_wanted.is_empty() {
        body.push_str("<p>No pets have been added yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for wanted in &view.pets_wanted {
            writeln!(
                body,
                "<li><a href=\"/pets/{}\">{}</a> ({})</li>",
                wanted.pet.id,
                escape_html(&wanted.pet.name),
                escape_html(&wanted.shelter_name)
            )
            .expect("write wanted pet");
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");

    if view.accepts_pets() {
        push_pet_search(&mut body, view);
    }

    if view.offers_submission() {
        push_submission_form(&mut body, view);
    }

    layout("Adoption Application", &body)
}

pub(crate) fn render_pet_page(view: &PetWithShelter) -> String {
    let mut body = String::new();
    writeln!(body, "<h1>{}</h1>", escape_html(&view.pet.name)).expect("write pet name");
    writeln!(body, "<p>Age: {}</p>", view.pet.age).expect("write age");
    writeln!(
        body,
        "<p>Listed by <a href=\"/shelters/{}\">{}</a></p>",
        view.pet.shelter_id,
        escape_html(&view.shelter_name)
    )
    .expect("write shelter link");

    layout(&view.pet.name, &body)
}

pub(crate) fn render_error_page(title: &str, message: &str) -> String {
    let mut body = String::new();
    writeln!(body, "<h1>{}</h1>", escape_html(title)).expect("write error heading");
    writeln!(body, "<p>{}</p>", escape_html(message)).expect("write error message");

    layout(title, &body)
}

fn push_pet_search(body: &mut String, view: &ApplicationPageView) {
    let application = &view.application;
    let query = view
        .search
        .as_ref()
        .map(|results| results.query.as_str())
        .unwrap_or_default();

    body.push_str("<section class=\"pet-search\">\n<h2>Add a Pet to this Application</h2>\n");
    writeln!(
        body,
        "<form method=\"get\" action=\"/apps/{}\">",
        application.id
    )
    .expect("write search form open");
    writeln!(
        body,
        "<label for=\"search\">Search</label> <input id=\"search\" name=\"search\" type=\"text\" value=\"{}\"> <button type=\"submit\">Submit</button>",
        escape_html(query)
    )
    .expect("write search field");
    body.push_str("</form>\n");

    if let Some(results) = &view.search {
        if results.matches.is_empty() {
            writeln!(
                body,
                "<p>No pets matched \"{}\".</p>",
                escape_html(&results.query)
            )
            .expect("write empty results");
        } else {
            body.push_str("<ul class=\"search-results\">\n");
            for found in &results.matches {
                writeln!(
                    body,
                    "<li id=\"pet_{}\"><a href=\"/pets/{}\">{}</a>, age {} ({})",
                    found.pet.id,
                    found.pet.id,
                    escape_html(&found.pet.name),
                    found.pet.age,
                    escape_html(&found.shelter_name)
                )
                .expect("write search result");
                writeln!(
                    body,
                    "<form method=\"post\" action=\"/apps/{}/pets/{}\"><button type=\"submit\">Adopt this pet</button></form></li>",
                    application.id, found.pet.id
                )
                .expect("write adopt form");
            }
            body.push_str("</ul>\n");
        }
    }

    body.push_str("</section>\n");
}

fn push_submission_form(body: &mut String, view: &ApplicationPageView) {
    let application = &view.application;

    body.push_str("<section class=\"submission\">\n<h2>Ready to Submit?</h2>\n");
    writeln!(
        body,
        "<form method=\"post\" action=\"/apps/{}/submit\">",
        application.id
    )
    .expect("write submit form open");
    writeln!(
        body,
        "<p><label for=\"description\">Description</label><br><textarea id=\"description\" name=\"description\">{}</textarea></p>",
        escape_html(&application.description)
    )
    .expect("write submit description");
    body.push_str("<p><button type=\"submit\">Submit Application</button></p>\n</form>\n</section>\n");
}

fn push_text_field(body: &mut String, id: &str, label: &str, value: &str) {
    writeln!(
        body,
        "<p><label for=\"{id}\">{label}</label><br><input id=\"{id}\" name=\"{id}\" type=\"text\" value=\"{}\"></p>",
        escape_html(value)
    )
    .expect("write text field");
}

fn locality_line(view: &ApplicationPageView) -> String {
    let application = &view.application;
    let mut line = application.city.clone();
    if !application.state.is_empty() {
        line.push_str(", ");
        line.push_str(&application.state);
    }
    if !application.zip_code.is_empty() {
        line.push(' ');
        line.push_str(&application.zip_code);
    }
    line
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
