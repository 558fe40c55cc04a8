//! Rendered email bodies for laundry notifications.

use crate::OutgoingEmail;

/// Render the "ready for pickup" email for a student.
///
/// Block and room lines are omitted when the student has none on file.
pub fn laundry_ready(
    to: &str,
    student_name: &str,
    batch_number: &str,
    block: Option<&str>,
    room_number: Option<&str>,
) -> OutgoingEmail {
    let subject = format!("Your Laundry Batch {batch_number} is Ready for Pickup! 🧺");

    let block_html = block
        .map(|b| format!("<p><strong>Block:</strong> {b}</p>"))
        .unwrap_or_default();
    let room_html = room_number
        .map(|r| format!("<p><strong>Room:</strong> {r}</p>"))
        .unwrap_or_default();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background-color: #4CAF50; color: white; padding: 20px; text-align: center;">
      <h1>🧺 Laundry Ready for Pickup!</h1>
    </div>
    <div style="background-color: #f9f9f9; padding: 30px;">
      <p>Hello {student_name},</p>
      <p>Great news! Your laundry batch is now ready for pickup.</p>
      <div style="background-color: white; padding: 15px; border-left: 4px solid #4CAF50;">
        <h3>Batch Details:</h3>
        <p><strong>Batch Number:</strong> {batch_number}</p>
        {block_html}
        {room_html}
        <p><strong>Status:</strong> Ready for Pickup ✅</p>
      </div>
      <p>Please visit the laundry room to collect your items. If you have any
      questions or concerns, please contact the laundry staff.</p>
      <p>Thank you for using our laundry service!</p>
      <p>Best regards,<br>Laundry Management Team</p>
    </div>
    <div style="text-align: center; margin-top: 20px; color: #666; font-size: 12px;">
      <p>This is an automated notification from the Laundry Management System.</p>
      <p>If you believe this is an error, please contact support.</p>
    </div>
  </div>
</body>
</html>"#
    );

    let block_text = block.map(|b| format!("- Block: {b}\n")).unwrap_or_default();
    let room_text = room_number
        .map(|r| format!("- Room: {r}\n"))
        .unwrap_or_default();

    let text = format!(
        "Hello {student_name},\n\n\
         Great news! Your laundry batch is now ready for pickup.\n\n\
         Batch Details:\n\
         - Batch Number: {batch_number}\n\
         {block_text}{room_text}\
         - Status: Ready for Pickup ✅\n\n\
         Please visit the laundry room to collect your items. If you have any \
         questions or concerns, please contact the laundry staff.\n\n\
         Thank you for using our laundry service!\n\n\
         Best regards,\nLaundry Management Team"
    );

    OutgoingEmail {
        to: to.to_string(),
        subject,
        html,
        text,
    }
}
