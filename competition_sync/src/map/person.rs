use chrono::{DateTime, Utc};

use crate::collect::person::PersonBundle;
use crate::map::names::clean_person_name;
use crate::models::person::{BirthInfo, Person};

pub fn map_person(bundle: &PersonBundle, now: DateTime<Utc>) -> Person {
    let info = &bundle.info;

    let birth = if info.birth_date.is_some() || info.birth_place.is_some() {
        Some(BirthInfo {
            date: info.birth_date,
            place: info.birth_place.clone(),
        })
    } else {
        None
    };

    Person {
        korastats_id: info.id,
        kind: bundle.kind,
        name: clean_person_name(&info.name),
        nationality: info.nationality.clone(),
        birth,
        photo: info.photo.clone(),
        position: info.position.clone(),
        last_synced: now,
        sync_version: 0,
    }
}
