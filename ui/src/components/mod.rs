pub mod app;
pub mod browser;
pub mod collapse;
pub mod faq_view;
pub mod html_content;
pub mod question_content;
pub mod questions_list;
pub mod questions_list_item;
