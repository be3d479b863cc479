mod activation_tests;
mod image_tests;
mod new_tests;
