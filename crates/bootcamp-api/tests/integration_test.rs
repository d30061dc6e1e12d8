use bootcamp_api::geocoder::TableGeocoder;
use bootcamp_api::lifecycle::DirectorySystem;
use bootcamp_api::bootcamp_actor::BootcampError;
use bootcamp_api::model::{
    BootcampCreate, BootcampFilter, BootcampUpdate, Career, CourseCreate, CourseUpdate, Skill,
    UserId, DEFAULT_PHOTO,
};
use resource_actor::ActorClient;
use std::sync::Arc;

fn bootcamp_params(name: &str, address: &str) -> BootcampCreate {
    BootcampCreate {
        name: name.to_string(),
        description: "Intensive full stack training".to_string(),
        website: Some("https://example.com".to_string()),
        email: Some("enroll@example.com".to_string()),
        phone: None,
        address: address.to_string(),
        careers: vec![Career::WebDevelopment, Career::UiUx],
        average_rating: None,
        average_cost: Some(12000.0),
        housing: true,
        job_assistance: true,
        job_guarantee: false,
        accept_gi: false,
        user: Some(UserId(1)),
    }
}

fn course_params(title: &str) -> CourseCreate {
    CourseCreate {
        title: title.to_string(),
        description: "12 week immersive".to_string(),
        weeks: 12,
        tuition: 9000.0,
        minimum_skill: Skill::Beginner,
        scholarship_available: false,
        bootcamp: None,
    }
}

/// Full end-to-end lifecycle with all real actors: create enriches the
/// document (slug + geocoded location), courses attach to the bootcamp,
/// and deleting the bootcamp cascades to its courses.
#[tokio::test]
async fn test_full_directory_lifecycle() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    let id = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params(
            "Devworks Bootcamp",
            "233 Bay State Rd, Boston, MA 02215",
        ))
        .await
        .expect("Failed to create bootcamp");

    let bootcamp = system
        .bootcamp_client
        .get(id)
        .await
        .expect("Failed to get bootcamp")
        .expect("Bootcamp not found");

    // Create-pipeline enrichment.
    assert_eq!(bootcamp.slug, "devworks-bootcamp");
    assert_eq!(bootcamp.photo, DEFAULT_PHOTO);
    assert!(bootcamp.address.is_none(), "raw address must not be stored");
    let location = bootcamp.location.expect("every stored bootcamp has a location");
    assert_eq!(location.coordinates, [-71.0589, 42.3601]);
    assert_eq!(location.city, "Boston");

    // Attach two courses, then read them back through the reverse view.
    for title in ["Front End Web Development", "Data Science Program"] {
        let mut params = course_params(title);
        params.bootcamp = Some(id);
        system
            .course_client
            .create_course(params)
            .await
            .expect("Failed to create course");
    }

    let courses = system
        .course_client
        .courses_for_bootcamp(id)
        .await
        .expect("Failed to list courses");
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.bootcamp == id));

    // Cascade: deleting the bootcamp removes its courses first.
    system
        .bootcamp_client
        .delete(id)
        .await
        .expect("Failed to delete bootcamp");

    assert!(system.bootcamp_client.get(id).await.unwrap().is_none());
    let remaining = system.course_client.courses_for_bootcamp(id).await.unwrap();
    assert!(remaining.is_empty(), "cascade should remove all courses");

    system.shutdown().await.expect("Failed to shutdown system");
}

/// A geocoding miss (no candidates for the address) aborts the create and
/// nothing reaches the store.
#[tokio::test]
async fn test_unresolvable_address_stores_nothing() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    let result = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Ghost Camp", "1 Nowhere Lane, ZZ"))
        .await;
    assert!(result.is_err(), "create should fail when geocoding fails");

    let all = system.bootcamp_client.list().await.unwrap();
    assert!(all.is_empty(), "failed create must not leave a partial entity");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_name_is_a_conflict() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Devworks Bootcamp", "Boston, MA"))
        .await
        .unwrap();

    let result = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Devworks Bootcamp", "New York, NY"))
        .await;
    assert!(result.is_err(), "same name should conflict");

    let all = system.bootcamp_client.list().await.unwrap();
    assert_eq!(all.len(), 1);

    system.shutdown().await.unwrap();
}

/// Updating the name re-derives the slug; updating the address re-runs
/// geocoding. A failed re-geocode leaves the stored entity untouched.
#[tokio::test]
async fn test_update_rederives_slug_and_location_atomically() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    let id = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Devworks Bootcamp", "Boston, MA"))
        .await
        .unwrap();

    // Rename + move to New York in one update.
    let updated = system
        .bootcamp_client
        .update_bootcamp(
            id,
            BootcampUpdate {
                name: Some("DevWorks NYC".to_string()),
                address: Some("New York, NY 10001".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update bootcamp");
    assert_eq!(updated.slug, "devworks-nyc");
    let location = updated.location.as_ref().unwrap();
    assert_eq!(location.city, "New York");
    assert!(updated.address.is_none());

    // A bad address fails the update and changes nothing, including the
    // other fields in the same payload.
    let result = system
        .bootcamp_client
        .update_bootcamp(
            id,
            BootcampUpdate {
                description: Some("Should not stick".to_string()),
                address: Some("Atlantis".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());

    let stored = system.bootcamp_client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.description, "Intensive full stack training");
    assert_eq!(stored.location.unwrap().city, "New York");

    system.shutdown().await.unwrap();
}

/// Name uniqueness holds on the update path as well: renaming a bootcamp
/// onto a taken name is rejected and both entities stay as they were.
#[tokio::test]
async fn test_rename_to_taken_name_conflicts() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Devworks Bootcamp", "Boston, MA"))
        .await
        .unwrap();
    let beta = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("ModernTech Bootcamp", "New York, NY"))
        .await
        .unwrap();

    let result = system
        .bootcamp_client
        .update_bootcamp(
            beta,
            BootcampUpdate {
                name: Some("Devworks Bootcamp".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(BootcampError::Conflict(_))));

    let stored = system.bootcamp_client.get(beta).await.unwrap().unwrap();
    assert_eq!(stored.name, "ModernTech Bootcamp");
    assert_eq!(stored.slug, "moderntech-bootcamp");

    // Updating other fields without touching the name does not trip the
    // uniqueness re-check.
    let updated = system
        .bootcamp_client
        .update_bootcamp(
            beta,
            BootcampUpdate {
                housing: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "ModernTech Bootcamp");

    system.shutdown().await.unwrap();
}

/// Course updates run the same field checks as the create path; a bad
/// payload leaves the stored course untouched.
#[tokio::test]
async fn test_course_update_runs_field_validation() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    let bootcamp = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Devworks Bootcamp", "Boston, MA"))
        .await
        .unwrap();
    let mut params = course_params("Front End Web Development");
    params.bootcamp = Some(bootcamp);
    let course = system.course_client.create_course(params).await.unwrap();

    let updated = system
        .course_client
        .update_course(
            course,
            CourseUpdate {
                tuition: Some(4500.0),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update course");
    assert_eq!(updated.tuition, 4500.0);

    // The create path's title length limit applies to updates too.
    let result = system
        .course_client
        .update_course(
            course,
            CourseUpdate {
                title: Some("x".repeat(101)),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());

    let result = system
        .course_client
        .update_course(
            course,
            CourseUpdate {
                description: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());

    let stored = system.course_client.get(course).await.unwrap().unwrap();
    assert_eq!(stored.title, "Front End Web Development");
    assert_eq!(stored.tuition, 4500.0);

    system.shutdown().await.unwrap();
}

/// The radius filter separates bootcamps by great-circle distance from a
/// geocoded center point.
#[tokio::test]
async fn test_radius_filter_separates_cities() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    let boston = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Boston Coding School", "Boston, MA 02215"))
        .await
        .unwrap();
    system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("LA Coding School", "Los Angeles, CA 90001"))
        .await
        .unwrap();

    // 50 miles around Boston: only the Boston school.
    let near_boston = system
        .bootcamp_client
        .find(BootcampFilter::WithinRadius {
            longitude: -71.0589,
            latitude: 42.3601,
            miles: 50.0,
        })
        .await
        .unwrap();
    assert_eq!(near_boston.len(), 1);
    assert_eq!(near_boston[0].id, boston);

    // A continent-sized radius catches both.
    let near_everything = system
        .bootcamp_client
        .find(BootcampFilter::WithinRadius {
            longitude: -71.0589,
            latitude: 42.3601,
            miles: 5000.0,
        })
        .await
        .unwrap();
    assert_eq!(near_everything.len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_photo_action_replaces_default() {
    let system = DirectorySystem::new(Arc::new(TableGeocoder::seeded()));

    let id = system
        .bootcamp_client
        .create_bootcamp(bootcamp_params("Devworks Bootcamp", "Boston, MA"))
        .await
        .unwrap();

    let stored = system
        .bootcamp_client
        .set_photo(id, "photo_1.jpg".to_string())
        .await
        .expect("Failed to set photo");
    assert_eq!(stored, "photo_1.jpg");

    let bootcamp = system.bootcamp_client.get(id).await.unwrap().unwrap();
    assert_eq!(bootcamp.photo, "photo_1.jpg");

    // Path-like filenames are rejected and the stored photo is unchanged.
    let result = system
        .bootcamp_client
        .set_photo(id, "../etc/passwd".to_string())
        .await;
    assert!(result.is_err());
    let bootcamp = system.bootcamp_client.get(id).await.unwrap().unwrap();
    assert_eq!(bootcamp.photo, "photo_1.jpg");

    system.shutdown().await.unwrap();
}
