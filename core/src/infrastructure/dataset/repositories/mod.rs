pub mod csv_macronutrient_repository;
pub mod sample_dish_repository;

pub use csv_macronutrient_repository::CsvMacronutrientRepository;
pub use sample_dish_repository::SampleDishRepository;
