// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Inspect role permissions from the command line.

use clap::{Parser, Subcommand};
use saas_auth::{permission_matrix, Action, Role, SubjectType, UserId};
use saas_server::inspect::{check, CheckRequest};
use saas_server::logging::init_tracing;
use saas_server::Authorizer;

#[derive(Parser, Debug)]
#[command(name = "saas-authz", about = "Inspect organization role permissions", version)]
struct Args {
	/// Config file (defaults to /etc/saas/server.toml)
	#[arg(long, global = true)]
	config: Option<std::path::PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the ordered rule set of a role as JSON
	Rules {
		/// ADMIN, MEMBER or BILLING
		role: Role,
	},
	/// Decide a single permission question
	Check {
		#[arg(long)]
		role: Role,
		/// manage, create, get, update, delete or transfer_ownership
		#[arg(long)]
		action: Action,
		/// User, Project, Organization, Invite, Billing or all
		#[arg(long)]
		subject: SubjectType,
		/// Acting user id (random when omitted)
		#[arg(long)]
		user: Option<UserId>,
		/// Owner of the subject instance
		#[arg(long)]
		owner: Option<UserId>,
		/// Author of the invite instance
		#[arg(long)]
		author: Option<UserId>,
	},
	/// Print the role × action × subject type matrix
	Matrix,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => saas_server_config::load_config_with_file(path)?,
		None => saas_server_config::load_config()?,
	};
	init_tracing(&config.logging);

	let authorizer = Authorizer::new(config.authz);

	let output = match args.command {
		Command::Rules { role } => serde_json::to_string_pretty(saas_auth::rules_for_role(role).as_slice())?,
		Command::Check {
			role,
			action,
			subject,
			user,
			owner,
			author,
		} => {
			let outcome = check(
				&authorizer,
				&CheckRequest {
					role,
					action,
					subject,
					user,
					owner,
					author,
				},
			);
			serde_json::to_string_pretty(&outcome)?
		}
		Command::Matrix => serde_json::to_string_pretty(&permission_matrix())?,
	};

	println!("{output}");
	Ok(())
}
