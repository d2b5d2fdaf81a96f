pub mod declare;
