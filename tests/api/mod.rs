mod country_tests;
mod health_tests;
mod person_tests;
