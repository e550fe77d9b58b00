pub mod ssm;
