//! Hemolink CLI
//!
//! Console frontend for the blood-donation coordination service. Every
//! subcommand maps onto one of the screens the desktop frontend offered:
//! sign-up, login, the donor profile form, and the request/pledge/donation
//! dashboards.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;

use hemolink_client::HemolinkClient;
use hemolink_core::model::{
    BloodRequestRef, BloodType, DonorProfileRef, NewBloodRequest, NewDonation, NewDonorPledge,
    NewDonorProfile, RegisterRequest, Rhesus, UserRef,
};

/// Hemolink - blood-donation coordination
#[derive(Parser, Debug)]
#[command(name = "hemolink")]
#[command(about = "Blood-donation coordination console", long_about = None)]
struct Args {
    /// Server base URL
    #[arg(long, env = "HEMOLINK_SERVER", default_value = "http://localhost:3002")]
    server: String,

    /// Bearer token from a previous login
    #[arg(long, env = "HEMOLINK_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and log in
    Register {
        /// Full name, first and last
        #[arg(long)]
        full_name: String,
        /// Email address (login identifier)
        #[arg(long)]
        email: String,
        /// Phone number, 7-15 digits with optional country code
        #[arg(long)]
        phone: String,
        /// Password, at least 6 characters
        #[arg(long)]
        password: String,
        /// Role: Donor, Recipient, or Admin
        #[arg(long, default_value = "UNASSIGNED")]
        role: String,
        /// Home address
        #[arg(long)]
        home_address: String,
        /// Blood type: A, B, AB, or O
        #[arg(long)]
        blood_type: BloodType,
        /// Rhesus factor: + or -
        #[arg(long)]
        rhesus: Rhesus,
    },
    /// Log in and print the issued token
    Login {
        /// Registered email address
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// User administration
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
    /// Donor profile operations
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Blood request operations
    Requests {
        #[command(subcommand)]
        command: RequestsCommand,
    },
    /// Donor pledge operations
    Pledges {
        #[command(subcommand)]
        command: PledgesCommand,
    },
    /// Donation operations
    Donations {
        #[command(subcommand)]
        command: DonationsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    /// List all users
    List,
    /// Find a user by email
    Find {
        /// Email to look up (case-insensitive)
        #[arg(long)]
        email: String,
    },
    /// Delete a user
    Delete {
        /// Id of the user to delete
        user_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// List all donor profiles
    List,
    /// Submit a donor profile for an existing user
    Create {
        /// Owning user's id
        #[arg(long)]
        user_id: i64,
        /// Blood type: A, B, AB, or O
        #[arg(long)]
        blood_type: BloodType,
        /// Rhesus factor: + or -
        #[arg(long)]
        rhesus: Rhesus,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,
        /// Eligible to donate again after (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        available_by: Option<NaiveDateTime>,
        /// Quiet period end (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        do_not_disturb_until: Option<NaiveDateTime>,
        /// Last donation (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        last_donation_date: Option<NaiveDateTime>,
        /// Availability label, e.g. Available
        #[arg(long)]
        availability_status: Option<String>,
        /// Maximum travel distance in km
        #[arg(long)]
        preferred_radius_km: Option<i64>,
        /// Current locality
        #[arg(long)]
        location: Option<String>,
        /// Home address
        #[arg(long)]
        home_address: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum RequestsCommand {
    /// List all blood requests
    List,
    /// Create a blood request for an existing user
    Create {
        /// Requesting user's id
        #[arg(long)]
        user_id: i64,
        /// Blood type needed: A, B, AB, or O
        #[arg(long)]
        blood_type: BloodType,
        /// Rhesus factor needed: + or -
        #[arg(long)]
        rhesus: Rhesus,
        /// Units needed
        #[arg(long)]
        units: i64,
        /// Receiving hospital
        #[arg(long)]
        hospital_name: Option<String>,
        /// Hospital address
        #[arg(long)]
        hospital_address: Option<String>,
        /// Urgency label, e.g. High
        #[arg(long)]
        urgency: Option<String>,
        /// Lifecycle label, e.g. Open
        #[arg(long, default_value = "Open")]
        status: String,
        /// Deadline (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        needed_before: Option<NaiveDateTime>,
        /// Context for donors
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a blood request
    Delete {
        /// Id of the request to delete
        request_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum PledgesCommand {
    /// Pledge a donor profile against a blood request
    Create {
        /// Pledging donor profile id
        #[arg(long)]
        donor_id: i64,
        /// Matched blood request id
        #[arg(long)]
        request_id: i64,
        /// Units pledged
        #[arg(long)]
        units: i64,
        /// Lifecycle label, e.g. Pending
        #[arg(long, default_value = "Pending")]
        status: String,
        /// Message to the requester
        #[arg(long)]
        message: Option<String>,
    },
    /// List all pledges
    List,
    /// List pledges against one blood request
    ByRequest {
        /// Blood request id
        request_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum DonationsCommand {
    /// Record a completed donation
    Create {
        /// Donating profile id
        #[arg(long)]
        donor_id: i64,
        /// Fulfilled blood request id
        #[arg(long)]
        request_id: i64,
        /// Units donated
        #[arg(long)]
        units: i64,
        /// Outcome label, e.g. Completed
        #[arg(long)]
        outcome: Option<String>,
        /// When the donation took place (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        donation_time: Option<NaiveDateTime>,
        /// Requester acknowledged receipt
        #[arg(long)]
        confirmed: bool,
    },
    /// List all donations
    List,
    /// Delete a donation
    Delete {
        /// Id of the donation to delete
        donation_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut client = HemolinkClient::new(&args.server);
    if let Some(token) = args.token {
        client.set_token(token);
    }

    match args.command {
        Command::Register {
            full_name,
            email,
            phone,
            password,
            role,
            home_address,
            blood_type,
            rhesus,
        } => {
            let form = RegisterRequest {
                full_name,
                email,
                phone: Some(phone),
                password,
                role,
                home_address: Some(home_address),
                blood_type: Some(blood_type),
                rhesus: Some(rhesus),
            };
            let auth = client.register(&form).await?;
            print_json(&auth)?;
        }
        Command::Login { email, password } => {
            let auth = client.login(&email, &password).await?;
            print_json(&auth)?;
        }
        Command::Users { command } => match command {
            UsersCommand::List => print_json(&client.users().await?)?,
            UsersCommand::Find { email } => print_json(&client.find_by_email(&email).await?)?,
            UsersCommand::Delete { user_id } => {
                client.delete_user(user_id).await?;
                println!("deleted user {user_id}");
            }
        },
        Command::Profile { command } => match command {
            ProfileCommand::List => print_json(&client.donor_profiles().await?)?,
            ProfileCommand::Create {
                user_id,
                blood_type,
                rhesus,
                date_of_birth,
                available_by,
                do_not_disturb_until,
                last_donation_date,
                availability_status,
                preferred_radius_km,
                location,
                home_address,
            } => {
                let form = NewDonorProfile {
                    blood_type,
                    rhesus,
                    date_of_birth,
                    last_donation_date,
                    available_by,
                    do_not_disturb_until,
                    availability_status,
                    preferred_radius_km,
                    donations_count: 0,
                    location,
                    home_address,
                    user: Some(UserRef { user_id }),
                };
                print_json(&client.submit_profile(&form).await?)?;
            }
        },
        Command::Requests { command } => match command {
            RequestsCommand::List => print_json(&client.blood_requests().await?)?,
            RequestsCommand::Create {
                user_id,
                blood_type,
                rhesus,
                units,
                hospital_name,
                hospital_address,
                urgency,
                status,
                needed_before,
                notes,
            } => {
                let form = NewBloodRequest {
                    needed_blood_type: blood_type,
                    needed_rhesus: rhesus,
                    units_needed: units,
                    hospital_name,
                    hospital_address,
                    urgency,
                    status: Some(status),
                    needed_before,
                    notes,
                    user: Some(UserRef { user_id }),
                };
                print_json(&client.create_blood_request(&form).await?)?;
            }
            RequestsCommand::Delete { request_id } => {
                client.delete_blood_request(request_id).await?;
                println!("deleted blood request {request_id}");
            }
        },
        Command::Pledges { command } => match command {
            PledgesCommand::List => print_json(&client.pledges().await?)?,
            PledgesCommand::ByRequest { request_id } => {
                print_json(&client.pledges_by_request(request_id).await?)?;
            }
            PledgesCommand::Create {
                donor_id,
                request_id,
                units,
                status,
                message,
            } => {
                let form = NewDonorPledge {
                    pledge_status: Some(status),
                    pledged_units: units,
                    message,
                    donor_profile: Some(DonorProfileRef { donor_id }),
                    matched_request: Some(BloodRequestRef { request_id }),
                };
                print_json(&client.create_pledge(&form).await?)?;
            }
        },
        Command::Donations { command } => match command {
            DonationsCommand::List => print_json(&client.donations().await?)?,
            DonationsCommand::Create {
                donor_id,
                request_id,
                units,
                outcome,
                donation_time,
                confirmed,
            } => {
                let form = NewDonation {
                    units_donated: units,
                    outcome,
                    donation_time,
                    confirmed_by_requester: Some(confirmed),
                    donor_profile: Some(DonorProfileRef { donor_id }),
                    fulfilled_request: Some(BloodRequestRef { request_id }),
                };
                print_json(&client.create_donation(&form).await?)?;
            }
            DonationsCommand::Delete { donation_id } => {
                client.delete_donation(donation_id).await?;
                println!("deleted donation {donation_id}");
            }
        },
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
